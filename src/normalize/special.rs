// src/normalize/special.rs

//! Per-entity exceptions. A handful of rows on the page are marked up
//! differently from the rest; each one is listed here with the cell shape
//! that triggers it and what to emit instead.

use scraper::ElementRef;

use super::cell::{children, find_child, find_descendant, text_content};
use crate::error::NormalizeError;

/// How a cell has to look for an exception to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Several child elements, one of them a line break.
    StackedRun,
    /// Flattened text starts with a three-digit number.
    FootnotedNumber,
    /// A lone `<code>` child that has markup of its own plus a footnote anchor.
    CodeAnchor,
    /// A lone child that is not `<code>`, with a footnote anchor inside.
    BareAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cut the flattened text into runs of `n` characters, comma-joined.
    SplitEvery(usize),
    /// Keep only the first whitespace-delimited token.
    LeadingToken,
    /// Emit `value`, but only if the footnote anchor still reads `anchor`.
    Literal {
        anchor: &'static str,
        value: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SpecialCase {
    pub alpha2: &'static str,
    pub shape: Shape,
    pub action: Action,
}

pub static SPECIAL_CASES: &[SpecialCase] = &[
    // Dominican Republic has three dial codes run together: "1-8091-8291-849".
    SpecialCase {
        alpha2: "DO",
        shape: Shape::StackedRun,
        action: Action::SplitEvery(5),
    },
    SpecialCase {
        alpha2: "SH",
        shape: Shape::FootnotedNumber,
        action: Action::LeadingToken,
    },
    SpecialCase {
        alpha2: "RS",
        shape: Shape::FootnotedNumber,
        action: Action::LeadingToken,
    },
    // FIFA: England, Northern Ireland, Scotland, Wales.
    SpecialCase {
        alpha2: "GB",
        shape: Shape::CodeAnchor,
        action: Action::Literal {
            anchor: "1",
            value: "ENG,NIR,SCO,WAL",
        },
    },
    // MARC splits the Minor Outlying Islands into five.
    SpecialCase {
        alpha2: "UM",
        shape: Shape::CodeAnchor,
        action: Action::Literal {
            anchor: "b",
            value: "ji,xf,wk,uc,up",
        },
    },
    // FIPS splits them into nine.
    SpecialCase {
        alpha2: "UM",
        shape: Shape::BareAnchor,
        action: Action::Literal {
            anchor: "a",
            value: "FQ,HQ,DQ,JQ,KQ,MQ,BQ,LQ,WQ",
        },
    },
];

impl Shape {
    pub fn matches(self, td: ElementRef<'_>) -> bool {
        let kids = children(td);
        match self {
            Shape::StackedRun => kids.len() > 1 && find_descendant(td, "br").is_some(),
            Shape::FootnotedNumber => {
                let text = text_content(td);
                let mut head = text.chars();
                (0..3).all(|_| head.next().is_some_and(|c| c.is_ascii_digit()))
            }
            Shape::CodeAnchor => {
                kids.len() == 1
                    && find_child(td, "code").is_some_and(|code| !children(code).is_empty())
                    && find_descendant(td, "a").is_some()
            }
            Shape::BareAnchor => {
                kids.len() == 1
                    && find_child(td, "code").is_none()
                    && find_descendant(td, "a").is_some()
            }
        }
    }
}

impl Action {
    fn apply(
        self,
        alpha2: &str,
        column: usize,
        td: ElementRef<'_>,
    ) -> Result<String, NormalizeError> {
        match self {
            Action::SplitEvery(n) => {
                let chars: Vec<char> = text_content(td).trim().chars().collect();
                Ok(chars
                    .chunks(n)
                    .map(|c| c.iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join(","))
            }
            Action::LeadingToken => Ok(text_content(td)
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()),
            Action::Literal { anchor, value } => {
                let found = find_descendant(td, "a")
                    .map(|a| text_content(a).trim().to_string())
                    .unwrap_or_default();
                if found != anchor {
                    return Err(NormalizeError::AnchorMismatch {
                        alpha2: alpha2.to_string(),
                        column,
                        expected: anchor,
                        found,
                    });
                }
                Ok(value.to_string())
            }
        }
    }
}

/// Look up the exception for `alpha2` whose shape fits `td`, if any, and
/// apply it.
pub fn resolve(
    alpha2: &str,
    column: usize,
    td: ElementRef<'_>,
) -> Result<Option<String>, NormalizeError> {
    SPECIAL_CASES
        .iter()
        .filter(|case| case.alpha2 == alpha2)
        .find(|case| case.shape.matches(td))
        .map(|case| case.action.apply(alpha2, column, td))
        .transpose()
}
