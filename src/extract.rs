// src/extract.rs

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::normalize::cell::{cells, text_content};

/// All rows carrying one stripe class, in document order.
#[derive(Debug)]
pub struct RowGroup<'a> {
    pub class: &'static str,
    pub rows: Vec<ElementRef<'a>>,
}

fn row_selector(class: &str) -> Result<Selector> {
    let css = format!("tr.{}", class);
    Selector::parse(&css).map_err(|e| anyhow!("invalid row selector {}: {:?}", css, e))
}

/// Collect the striped data rows, one group per class, groups in the
/// order the classes are given.
#[instrument(level = "debug", skip(doc))]
pub fn striped_rows<'a>(doc: &'a Html, classes: &[&'static str]) -> Result<Vec<RowGroup<'a>>> {
    let mut groups = Vec::with_capacity(classes.len());
    for &class in classes {
        let sel = row_selector(class)?;
        let rows: Vec<ElementRef<'a>> = doc.select(&sel).collect();
        debug!(class, rows = rows.len(), "collected striped rows");
        groups.push(RowGroup { class, rows });
    }
    Ok(groups)
}

/// The page's own column labels, from the first header row.
pub fn header_names(doc: &Html, class: &str) -> Result<Option<Vec<String>>> {
    let sel = row_selector(class)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(|tr| cells(tr).map(|th| text_content(th).trim().to_string()).collect()))
}

/// Warn when the page's header row no longer lines up with `expected`.
/// Returns whether the widths agree; a missing header row counts as agreement.
pub fn check_header_width(doc: &Html, class: &str, expected: usize) -> Result<bool> {
    match header_names(doc, class)? {
        Some(names) if names.len() != expected => {
            warn!(
                found = names.len(),
                expected,
                header = ?names,
                "header row width differs from column list; page layout may have changed"
            );
            Ok(false)
        }
        Some(_) => Ok(true),
        None => {
            debug!(class, "no header row found");
            Ok(true)
        }
    }
}
