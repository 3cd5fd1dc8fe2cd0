// src/config.rs

use std::path::PathBuf;

/// The statoids page listing every entity and its codes across standards.
pub const STATOIDS_URL: &str = "http://www.statoids.com/wab.html";

/// Matches the schema of the `iso_3166_1` table the file is loaded into.
pub const OUTPUT_PATH: &str = "data/statoids/iso_3166_1.csv";

/// Everything the run needs to know. There is no CLI or file surface;
/// `Default` is the production setting and tests build their own.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub output: PathBuf,
    /// Row classes of the striped data table, processed in this order.
    pub row_classes: [&'static str; 2],
    /// Row class of the page's own column header row.
    pub header_class: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: STATOIDS_URL.to_string(),
            output: PathBuf::from(OUTPUT_PATH),
            row_classes: ["e", "o"],
            header_class: "hd",
        }
    }
}
