// src/process/phone.rs
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::table::Table;

/// Index of the phone column in the source layout.
pub const PHONE_FIELD: usize = 5;

/// Recognizes Russian-style numbers anchored at the start of the field:
/// an optional "+7"/"8" country prefix, a 3-digit area code (optionally
/// parenthesized), then 3/2/2-digit groups with space or dash
/// separators, and an optional extension (an optional word label ending
/// in "." plus 4 digits, optionally parenthesized).
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:\+7|8)[\s-]*\(?(\d{3})\)?[\s-]*(\d{3})[\s-]*(\d{2})[\s-]*(\d{2})(?:\s*\(?(?:\w+\.)?\s*(\d{4})\)?)?",
    )
    .expect("phone pattern should be a valid regex")
});

/// A phone number recognized in a raw field, broken into its groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhone {
    /// 3-digit area code.
    pub area: String,
    /// First 3-digit subscriber group.
    pub prefix: String,
    /// Middle 2-digit subscriber group.
    pub mid: String,
    /// Final 2-digit subscriber group.
    pub tail: String,
    /// 4-digit internal extension, when present.
    pub extension: Option<String>,
    /// Byte length of the recognized portion of the raw field.
    pub matched_len: usize,
}

impl ParsedPhone {
    /// Render the number in the canonical `+7(AAA)GGG-GG-GG` form. The
    /// extension is not part of the canonical number; callers append it
    /// separately.
    pub fn canonical(&self) -> String {
        format!(
            "+7({}){}-{}-{}",
            self.area, self.prefix, self.mid, self.tail
        )
    }
}

/// Try to recognize a phone number at the start of `raw`. Returns None
/// when the field holds no recognizable number (free text such as
/// "не указан").
pub fn parse_phone(raw: &str) -> Option<ParsedPhone> {
    let caps = PHONE_PATTERN.captures(raw)?;
    let whole = caps.get(0).expect("capture 0 is the whole match");

    Some(ParsedPhone {
        area: caps[1].to_string(),
        prefix: caps[2].to_string(),
        mid: caps[3].to_string(),
        tail: caps[4].to_string(),
        extension: caps.get(5).map(|m| m.as_str().to_string()),
        matched_len: whole.end(),
    })
}

/// Rewrite every row's phone field into the canonical form, keeping any
/// unrecognized trailing text and re-appending a captured extension as
/// " доб.NNNN". Fields with no recognizable number are left exactly as
/// they were.
pub fn format_phones(table: &mut Table) -> Result<()> {
    for (idx, row) in table.rows.iter_mut().enumerate() {
        let Some(raw) = row.get(PHONE_FIELD) else {
            bail!(
                "row {} has {} fields, expected at least {}",
                idx,
                row.len(),
                PHONE_FIELD + 1
            );
        };

        let Some(parsed) = parse_phone(raw) else {
            debug!(row = idx, field = %raw, "phone field not recognized, left as-is");
            continue;
        };

        let mut fixed = parsed.canonical();
        fixed.push_str(&raw[parsed.matched_len..]);
        let mut fixed = fixed.trim().to_string();
        if let Some(ext) = &parsed.extension {
            fixed.push_str(" доб.");
            fixed.push_str(ext);
        }
        row[PHONE_FIELD] = fixed;
    }
    Ok(())
}
