// src/table/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{io::Cursor, path::Path};

/// A phonebook held fully in memory: one header row plus data rows.
/// Every data row has exactly as many fields as the header; the strict
/// CSV reader enforces this at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names from the first row of the source CSV, carried
    /// through every stage unmodified.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field).
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text (standard quoting) into a Table. The first record
    /// is the header; a record whose field count differs from the
    /// header's is a fatal parse error.
    pub fn parse_csv(text: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(text.as_bytes()));

        let headers: Vec<String> = rdr
            .headers()
            .context("reading CSV header row")?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("CSV parse error at record {}", idx))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Table { headers, rows })
    }

    /// Serialize the whole table to `path` in one pass, header first,
    /// with standard CSV quoting.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("creating output file {:?}", path))?;

        wtr.write_record(&self.headers)
            .context("writing header row")?;
        for (idx, row) in self.rows.iter().enumerate() {
            wtr.write_record(row)
                .with_context(|| format!("writing row {}", idx))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing output file {:?}", path))?;
        Ok(())
    }
}
