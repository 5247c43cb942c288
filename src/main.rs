use anyhow::Result;
use phonebook::{fetch, process, table::Table};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Source of the raw phonebook CSV.
static PHONEBOOK_URL: &str =
    "https://raw.githubusercontent.com/netology-code/py-homeworks-advanced/master/5.Regexp/phonebook_raw.csv";

/// Where the normalized phonebook lands.
static OUTPUT_PATH: &str = "phonebook_fixed.csv";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fetch the raw phonebook ──────────────────────────────────
    let client = Client::new();
    info!(url = PHONEBOOK_URL, "fetching raw phonebook");
    let raw = fetch::fetch_phonebook(&client, PHONEBOOK_URL).await?;
    info!(rows = raw.rows.len(), "loaded raw phonebook");

    // ─── 3) normalize: names → duplicates → phone numbers ────────────
    let table: Table = process::normalize_phonebook(raw)?;

    // ─── 4) write the result ─────────────────────────────────────────
    table.write_csv(OUTPUT_PATH)?;
    info!(rows = table.rows.len(), path = OUTPUT_PATH, "wrote normalized phonebook");

    Ok(())
}
