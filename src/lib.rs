// src/lib.rs

pub mod capitalize;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod record;
pub mod write;

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument, trace};

use config::Config;
use record::{EntityRecord, EntityTable, COLUMN_NAMES};

/// Counts from one run, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub artifacts: usize,
    pub written: usize,
}

/// Normalize every striped row of `doc` into an [`EntityTable`].
#[instrument(level = "info", skip(doc, config))]
pub fn build_table(doc: &Html, config: &Config) -> Result<(EntityTable, usize)> {
    extract::check_header_width(doc, config.header_class, COLUMN_NAMES.len())?;

    let mut table = EntityTable::new();
    let mut rows = 0;
    for group in extract::striped_rows(doc, &config.row_classes)? {
        for (i, tr) in group.rows.iter().enumerate() {
            let ctx = || format!("row {} of class {:?}", i, group.class);
            let row = normalize::normalize_row(*tr).with_context(ctx)?;
            let record = EntityRecord::from_row(row).with_context(ctx)?;
            rows += 1;

            if record.is_entity() {
                trace!(alpha2 = %record.alpha2(), name = %record.display_name(), "parsed entity");
            } else {
                debug!(alpha2 = %record.alpha2(), class = group.class, "artifact row");
            }
            if table.insert(record).is_some() {
                debug!(class = group.class, index = i, "duplicate code; later row wins");
            }
        }
    }
    info!(rows, codes = table.len(), "built entity table");
    Ok((table, rows))
}

/// Parse an already-fetched page and write the output file.
pub fn run_on_html(body: &str, config: &Config) -> Result<RunSummary> {
    let doc = fetch::parse_document(body);
    let (table, rows) = build_table(&doc, config)?;
    let entities = table.entities().count();
    let written = write::write_file(&config.output, &table)?;
    Ok(RunSummary {
        rows,
        artifacts: table.len() - entities,
        written,
    })
}

/// Fetch, parse, normalize and write, in that order.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let client = Client::new();
    let body = fetch::fetch_page(&client, &config.url).await?;
    run_on_html(&body, config)
}
