// src/normalize/mod.rs

//! Turn one `<tr>` of the statoids table into plain field values.
//!
//! Cells are folded left to right into a partial row. Several rules look
//! at the two-letter code already resolved at [`ALPHA2_INDEX`], so a cell
//! is always interpreted against the fields to its left.

pub mod cell;
pub mod special;

use scraper::ElementRef;
use tracing::trace;

use crate::error::NormalizeError;
use crate::record::ALPHA2_INDEX;
use cell::{
    cells, children, find_child, find_descendant, is_tag, leading_text, tail_text, text_content,
};

/// What one cell contributes to the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Value(String),
    /// A spanning cell: this many empty fields.
    Blank(usize),
}

/// Normalize a whole row.
pub fn normalize_row(tr: ElementRef<'_>) -> Result<Vec<String>, NormalizeError> {
    cells(tr).try_fold(Vec::new(), |mut row, td| {
        match resolve_cell(td, &row)? {
            Resolved::Value(v) => row.push(v),
            Resolved::Blank(n) => row.extend(std::iter::repeat(String::new()).take(n)),
        }
        Ok(row)
    })
}

/// Interpret one cell given the fields already resolved to its left.
pub fn resolve_cell(td: ElementRef<'_>, row: &[String]) -> Result<Resolved, NormalizeError> {
    let column = row.len();
    let kids = children(td);

    if kids.is_empty() {
        return Ok(Resolved::Value(text_content(td).trim().to_string()));
    }

    if let Some(span) = td.value().attr("colspan") {
        return match span.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Resolved::Blank(n)),
            _ => Err(NormalizeError::InvalidColspan {
                column,
                value: span.to_string(),
            }),
        };
    }

    if let Some(alpha2) = row.get(ALPHA2_INDEX) {
        if let Some(v) = special::resolve(alpha2, column, td)? {
            trace!(alpha2 = %alpha2, column, value = %v, "special case");
            return Ok(Resolved::Value(v));
        }
    }

    if kids.len() == 1 {
        let only = kids[0];

        // two stacked values
        if is_tag(only, "br") {
            return Ok(Resolved::Value(format!(
                "{},{}",
                leading_text(td).trim(),
                tail_text(only).trim()
            )));
        }

        if let Some(code) = find_child(td, "code") {
            let own = leading_text(code).trim().to_string();
            if !children(code).is_empty() {
                if let Some(br) = find_descendant(td, "br") {
                    return Ok(Resolved::Value(format!("{},{}", own, tail_text(br).trim())));
                }
            }
            // drop any footnote anchor
            return Ok(Resolved::Value(own));
        }
    }

    Ok(Resolved::Value(text_content(td).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn normalize(cells: &str) -> Result<Vec<String>, NormalizeError> {
        let doc = Html::parse_document(&format!("<table><tr>{}</tr></table>", cells));
        let sel = Selector::parse("tr").unwrap();
        normalize_row(doc.select(&sel).next().unwrap())
    }

    #[test]
    fn plain_cells_are_trimmed_text() {
        let row = normalize("<td> FRANCE </td><td>FR</td><td>FRA</td><td>250</td>").unwrap();
        assert_eq!(row, vec!["FRANCE", "FR", "FRA", "250"]);
    }

    #[test]
    fn colspan_expands_to_blanks() {
        let row = normalize("<td>X</td><td>XX</td><td colspan=\"3\"><i>n/a</i></td><td>1</td>").unwrap();
        assert_eq!(row, vec!["X", "XX", "", "", "", "1"]);
    }

    #[test]
    fn leaf_colspan_is_plain_text() {
        let row = normalize("<td colspan=\"2\">both</td>").unwrap();
        assert_eq!(row, vec!["both"]);
    }

    #[test]
    fn bad_colspan_fails_the_row() {
        let err = normalize("<td>X</td><td colspan=\"two\"><b>-</b></td>").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidColspan {
                column: 1,
                value: "two".into()
            }
        );
        assert!(normalize("<td colspan=\"0\"><b>-</b></td>").is_err());
    }

    #[test]
    fn line_break_joins_two_values() {
        let row = normalize("<td>A</td><td>AA</td><td>ABC<br>XYZ</td>").unwrap();
        assert_eq!(row[2], "ABC,XYZ");
    }

    #[test]
    fn code_with_break_joins_codes() {
        let row = normalize("<td>A</td><td>AA</td><td><code>ABC<br>DEF</code></td>").unwrap();
        assert_eq!(row[2], "ABC,DEF");
    }

    #[test]
    fn code_drops_footnote_anchor() {
        let row = normalize("<td>A</td><td>FR</td><td><code>FRA<a href=\"#x\">3</a></code></td>").unwrap();
        assert_eq!(row[2], "FRA");
        let row = normalize("<td>A</td><td>FR</td><td><code>FRA</code></td>").unwrap();
        assert_eq!(row[2], "FRA");
    }

    #[test]
    fn special_cases_see_resolved_code() {
        let row = normalize(
            "<td>UNITED KINGDOM</td><td>GB</td><td><code>ENG<a>1</a></code></td><td>826 <a>f</a></td>",
        )
        .unwrap();
        assert_eq!(row[2], "ENG,NIR,SCO,WAL");
        // not SH/RS, so the fallback keeps the whole text
        assert_eq!(row[3], "826 f");
    }

    #[test]
    fn saint_helena_dial_code() {
        let row = normalize("<td>SAINT HELENA</td><td>SH</td><td>290 <a>c</a></td>").unwrap();
        assert_eq!(row[2], "290");
    }

    #[test]
    fn anchor_mismatch_aborts() {
        let err = normalize("<td>UM</td><td>UM</td><td><a>q</a></td>").unwrap_err();
        assert!(matches!(err, NormalizeError::AnchorMismatch { column: 2, .. }));
    }

    #[test]
    fn code_rules_need_a_resolved_code_column() {
        // the first cell cannot be special-cased; nothing resolved yet
        let row = normalize("<td><a>a</a></td>").unwrap();
        assert_eq!(row, vec!["a"]);
    }
}
