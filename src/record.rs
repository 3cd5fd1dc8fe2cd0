// src/record.rs

use std::collections::HashMap;

use crate::capitalize::capitalize_country_name;
use crate::error::NormalizeError;

/// Positional meaning of a normalized row. Some statoids labels are
/// renamed to say which standard they come from.
pub const COLUMN_NAMES: [&str; 14] = [
    "Entity",
    "ISO3166-1-Alpha-2",
    "ISO3166-1-Alpha-3",
    "ISO3166-1-numeric",
    "ITU",
    "FIPS",
    "IOC",
    "FIFA",
    "DS",
    "WMO",
    "GAUL",
    "MARC",
    "Dial",
    "is_independent",
];

pub const ENTITY_INDEX: usize = 0;
pub const ALPHA2_INDEX: usize = 1;

/// Columns kept in the output, in output order.
pub const OUTPUT_COLUMNS: [&str; 3] = ["ISO3166-1-Alpha-2", "ISO3166-1-Alpha-3", "ISO3166-1-numeric"];
pub const OUTPUT_HEADER: [&str; 3] = ["alpha_2", "alpha_3", "numeric"];

/// Two-letter "codes" that are really text from other tables on the page.
pub const PLACEHOLDER_CODES: &[&str] = &["", "Codes", "Codes Codes", "Codes Codes Codes"];

/// Exactly two ASCII capital letters.
pub fn is_valid_alpha2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// One entity's fields, aligned with [`COLUMN_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    values: Vec<String>,
}

impl EntityRecord {
    /// Build a record from a normalized row. Rows with a real two-letter
    /// code must have one value per column; rows without one are stray
    /// markup and are kept as-is so the writer can drop them.
    pub fn from_row(mut row: Vec<String>) -> Result<Self, NormalizeError> {
        let alpha2 = row.get(ALPHA2_INDEX).map(String::as_str).unwrap_or_default();
        if is_valid_alpha2(alpha2) && row.len() != COLUMN_NAMES.len() {
            return Err(NormalizeError::RowLength {
                alpha2: alpha2.to_string(),
                expected: COLUMN_NAMES.len(),
                found: row.len(),
            });
        }
        row.truncate(COLUMN_NAMES.len());
        Ok(Self { values: row })
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = COLUMN_NAMES.iter().position(|c| *c == column)?;
        self.values.get(idx).map(String::as_str)
    }

    pub fn alpha2(&self) -> &str {
        self.values
            .get(ALPHA2_INDEX)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Whether this row describes an actual entity.
    pub fn is_entity(&self) -> bool {
        let code = self.alpha2();
        !PLACEHOLDER_CODES.contains(&code) && is_valid_alpha2(code)
    }

    /// The statoids entity name, title-cased.
    pub fn display_name(&self) -> String {
        self.values
            .get(ENTITY_INDEX)
            .map(|n| capitalize_country_name(n))
            .unwrap_or_default()
    }

    /// The three output fields, or `None` if the row is too short to have them.
    pub fn output(&self) -> Option<[&str; 3]> {
        Some([
            self.get(OUTPUT_COLUMNS[0])?,
            self.get(OUTPUT_COLUMNS[1])?,
            self.get(OUTPUT_COLUMNS[2])?,
        ])
    }
}

/// Records keyed by two-letter code. A code keeps the position of its first
/// insertion; later rows with the same code replace the values.
#[derive(Debug, Default)]
pub struct EntityTable {
    order: Vec<String>,
    records: HashMap<String, EntityRecord>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, returning the record it replaced, if any.
    pub fn insert(&mut self, record: EntityRecord) -> Option<EntityRecord> {
        let key = record.alpha2().to_string();
        let prev = self.records.insert(key.clone(), record);
        if prev.is_none() {
            self.order.push(key);
        }
        prev
    }

    pub fn get(&self, alpha2: &str) -> Option<&EntityRecord> {
        self.records.get(alpha2)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order, artifacts included.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.order.iter().filter_map(|k| self.records.get(k))
    }

    /// Only records for real entities.
    pub fn entities(&self) -> impl Iterator<Item = &EntityRecord> {
        self.iter().filter(|r| r.is_entity())
    }
}
