//! Long-item selection and CSV export.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::constants::threshold::CSV_HEADER;
use crate::errors::DatasetError;
use crate::measure::Measurements;
use crate::types::{GroupName, ItemName};

/// One item whose token count exceeds the configured threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LongItemRecord {
    /// Group (book) the item belongs to.
    pub group: GroupName,
    /// File name of the item.
    pub item: ItemName,
    /// Measured token count without any marker prefix.
    pub token_count: usize,
}

/// Select every item measuring strictly more than `threshold` tokens.
///
/// An item at exactly `threshold` tokens is not long. Records come back
/// sorted by group then item, which is also the CSV row order.
pub fn long_items(measurements: &Measurements, threshold: usize) -> Vec<LongItemRecord> {
    measurements
        .iter()
        .filter(|(_, counts)| counts.token_count > threshold)
        .map(|(id, counts)| LongItemRecord {
            group: id.group.clone(),
            item: id.item.clone(),
            token_count: counts.token_count,
        })
        .collect()
}

/// Write `records` to `out_path` as CSV under the `book,poem,token_count`
/// header. An empty selection still produces the header line.
pub fn write_csv(out_path: &Path, records: &[LongItemRecord]) -> Result<(), DatasetError> {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&format!(
            "{},{},{}\n",
            record.group, record.item, record.token_count
        ));
    }
    fs::write(out_path, csv)?;
    debug!(path = %out_path.display(), rows = records.len(), "wrote long item csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::threshold::LONG_POEM_TOKENS;
    use crate::corpus::ItemId;
    use crate::measure::ItemCounts;
    use tempfile::tempdir;

    fn measurements(entries: &[(&str, &str, usize)]) -> Measurements {
        entries
            .iter()
            .map(|&(group, item, token_count)| {
                (
                    ItemId::new(group, item),
                    ItemCounts {
                        token_count,
                        word_count: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn threshold_is_strict() {
        let measurements = measurements(&[
            ("book", "a.txt", 2000),
            ("book", "b.txt", 500),
            ("book", "c.txt", 1025),
            ("book", "d.txt", 1024),
        ]);
        let long = long_items(&measurements, LONG_POEM_TOKENS);
        let names: Vec<&str> = long.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(names, ["a.txt", "c.txt"]);
    }

    #[test]
    fn records_are_sorted_by_group_then_item() {
        let measurements = measurements(&[
            ("book_b", "a.txt", 1500),
            ("book_a", "z.txt", 1500),
            ("book_a", "a.txt", 1500),
        ]);
        let long = long_items(&measurements, LONG_POEM_TOKENS);
        let pairs: Vec<(&str, &str)> = long
            .iter()
            .map(|r| (r.group.as_str(), r.item.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("book_a", "a.txt"),
                ("book_a", "z.txt"),
                ("book_b", "a.txt")
            ]
        );
    }

    #[test]
    fn csv_carries_header_and_rows() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("long_poems.csv");
        let records = vec![LongItemRecord {
            group: "book_a".into(),
            item: "epic.txt".into(),
            token_count: 2048,
        }];
        write_csv(&out, &records).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "book,poem,token_count\nbook_a,epic.txt,2048\n");
    }

    #[test]
    fn empty_selection_writes_header_only() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("long_poems.csv");
        write_csv(&out, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "book,poem,token_count\n"
        );
    }
}
