// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument};
use url::Url;

/// GET `url` once and return the body. No retry: any failure ends the run.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let url = Url::parse(url).with_context(|| format!("parsing page URL {}", url))?;
    debug!("Fetching text from {}", url);
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?;
    info!(bytes = body.len(), "fetched page");
    Ok(body)
}

pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}
