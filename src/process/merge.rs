// src/process/merge.rs
use std::collections::BTreeMap;

use tracing::debug;

use crate::table::Table;

/// Collapse rows sharing the same (first, last) name pair into a single
/// contact.
///
/// Rows are grouped under an ordered map, so output rows come back
/// sorted by (first, last) and a given input always produces the same
/// output. Within a group the rows keep their input order: for each
/// column the merged row takes the first non-empty value encountered,
/// or the empty string if every row left that column blank. Singleton
/// groups pass through untouched.
///
/// Running the merge on its own output is the identity, since every key
/// then maps to exactly one row.
pub fn merge_duplicates(table: Table) -> Table {
    let mut groups: BTreeMap<(String, String), Vec<Vec<String>>> = BTreeMap::new();
    for row in table.rows {
        let key = (row[0].clone(), row[1].clone());
        groups.entry(key).or_default().push(row);
    }

    let mut merged = 0usize;
    let rows = groups
        .into_values()
        .map(|group| {
            if group.len() == 1 {
                return group.into_iter().next().unwrap();
            }
            merged += 1;
            let fields_num = group[0].len();
            (0..fields_num)
                .map(|i| {
                    group
                        .iter()
                        .map(|row| row[i].as_str())
                        .find(|value| !value.is_empty())
                        .unwrap_or("")
                        .to_string()
                })
                .collect()
        })
        .collect();
    debug!(merged, "collapsed duplicate contact groups");

    Table {
        headers: table.headers,
        rows,
    }
}
