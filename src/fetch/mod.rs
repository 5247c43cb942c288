// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::table::Table;

/// Download the raw phonebook CSV from `url_str` and parse it into a
/// Table. A non-success HTTP status or a transient network failure is
/// fatal; there is no retry.
pub async fn fetch_phonebook(client: &Client, url_str: &str) -> Result<Table> {
    let url = Url::parse(url_str).with_context(|| format!("invalid phonebook URL {}", url_str))?;

    let resp = client
        .get(url.as_str())
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?;

    let body = resp
        .text()
        .await
        .with_context(|| format!("reading body of {}", url))?;
    debug!(bytes = body.len(), "downloaded raw phonebook");

    Table::parse_csv(&body).with_context(|| format!("parsing CSV from {}", url))
}
