// src/process/names.rs
use anyhow::{bail, Result};

use crate::table::Table;

/// Number of name components every row carries: first, last, middle.
pub const NAME_FIELDS: usize = 3;

/// Reassemble the first three fields of every row into exactly
/// (first, last, middle).
///
/// The raw data scatters name parts across the first three columns with
/// embedded blanks ("Ivan Petrov" in one field, or "Ivan","","Petrov").
/// Joining the three fields and re-splitting on whitespace recovers the
/// components; the result is truncated to three tokens and right-padded
/// with empty strings to three. Fields from index 3 onward are left
/// untouched.
pub fn normalize_names(table: &mut Table) -> Result<()> {
    for (idx, row) in table.rows.iter_mut().enumerate() {
        if row.len() < NAME_FIELDS {
            bail!(
                "row {} has {} fields, expected at least {}",
                idx,
                row.len(),
                NAME_FIELDS
            );
        }

        let full_name = row[..NAME_FIELDS].join(" ");
        let mut parts: Vec<String> = full_name
            .split_whitespace()
            .take(NAME_FIELDS)
            .map(str::to_string)
            .collect();
        parts.resize(NAME_FIELDS, String::new());

        row.splice(..NAME_FIELDS, parts);
    }
    Ok(())
}
