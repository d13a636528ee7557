use std::io::Write;

use crate::constants::report::RANKING_SIZE;
use crate::errors::DatasetError;
use crate::measure::Measurements;
use crate::stats;

/// Which measured dimension a report or histogram covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// Whitespace-delimited word counts.
    Words,
    /// Subword token counts.
    Tokens,
}

impl Dimension {
    fn label(self) -> &'static str {
        match self {
            Dimension::Words => "word count",
            Dimension::Tokens => "token count",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Dimension::Words => "words",
            Dimension::Tokens => "tokens",
        }
    }
}

/// Extract the observations for `dimension` in enumeration (key) order.
///
/// Items that were never measured along `dimension` are omitted; in practice
/// either all items carry a word count or none do.
pub fn dimension_values(measurements: &Measurements, dimension: Dimension) -> Vec<f64> {
    measurements
        .values()
        .filter_map(|counts| match dimension {
            Dimension::Tokens => Some(counts.token_count as f64),
            Dimension::Words => counts.word_count.map(|count| count as f64),
        })
        .collect()
}

/// Write the full human-facing summary for one dimension: total, top/bottom
/// rankings, and the four descriptive statistics.
///
/// An empty measurement set (or one without the requested dimension) fails
/// with [`DatasetError::EmptyInput`] and aborts the workflow.
pub fn write_summary<W: Write>(
    out: &mut W,
    measurements: &Measurements,
    dimension: Dimension,
) -> Result<(), DatasetError> {
    let ranked: Vec<(String, usize)> = measurements
        .iter()
        .filter_map(|(id, counts)| {
            let value = match dimension {
                Dimension::Tokens => Some(counts.token_count),
                Dimension::Words => counts.word_count,
            };
            value.map(|value| (id.to_string(), value))
        })
        .collect();
    if ranked.is_empty() {
        return Err(DatasetError::EmptyInput);
    }

    let label = dimension.label();
    let unit = dimension.unit();
    let total: usize = ranked.iter().map(|(_, value)| value).sum();
    writeln!(out, "\nTotal {label}: {total}")?;

    // Stable sorts keep enumeration order among equal values.
    let mut descending = ranked.clone();
    descending.sort_by(|a, b| b.1.cmp(&a.1));
    writeln!(out, "\nTop {RANKING_SIZE} by {label}:")?;
    for (name, value) in descending.iter().take(RANKING_SIZE) {
        writeln!(out, "  {name}: {value} {unit}")?;
    }

    let mut ascending = ranked.clone();
    ascending.sort_by(|a, b| a.1.cmp(&b.1));
    writeln!(out, "\nBottom {RANKING_SIZE} by {label}:")?;
    for (name, value) in ascending.iter().take(RANKING_SIZE) {
        writeln!(out, "  {name}: {value} {unit}")?;
    }

    let values: Vec<f64> = ranked.iter().map(|(_, value)| *value as f64).collect();
    writeln!(out, "\nAverage {label}: {}", stats::average(&values)?)?;
    writeln!(out, "Median {label}: {}", stats::median(&values)?)?;
    writeln!(out, "Mode {label}: {}", stats::mode(&values)?)?;
    writeln!(
        out,
        "Standard deviation of {label}: {}",
        stats::std_dev(&values)?
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ItemId;
    use crate::measure::ItemCounts;

    fn counts(token_count: usize) -> ItemCounts {
        ItemCounts {
            token_count,
            word_count: None,
        }
    }

    fn sample() -> Measurements {
        let mut measurements = Measurements::new();
        measurements.insert(ItemId::new("book_a", "p1.txt"), counts(10));
        measurements.insert(ItemId::new("book_a", "p2.txt"), counts(30));
        measurements.insert(ItemId::new("book_b", "p1.txt"), counts(20));
        measurements
    }

    #[test]
    fn summary_reports_total_and_rankings() {
        let mut out = Vec::new();
        write_summary(&mut out, &sample(), Dimension::Tokens).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total token count: 60"));
        let top_pos = text.find("book_a - p2.txt: 30 tokens").unwrap();
        assert!(text[top_pos..].contains("book_a - p1.txt: 10 tokens"));
        assert!(text.contains("Average token count: 20"));
        assert!(text.contains("Median token count: 20"));
    }

    #[test]
    fn ties_preserve_enumeration_order() {
        let mut measurements = Measurements::new();
        measurements.insert(ItemId::new("book_b", "p1.txt"), counts(5));
        measurements.insert(ItemId::new("book_a", "p1.txt"), counts(5));
        let mut out = Vec::new();
        write_summary(&mut out, &measurements, Dimension::Tokens).unwrap();
        let text = String::from_utf8(out).unwrap();

        // BTreeMap enumerates book_a first; the stable sort keeps it first.
        let a_pos = text.find("book_a - p1.txt").unwrap();
        let b_pos = text.find("book_b - p1.txt").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn empty_measurements_abort_with_empty_input() {
        let mut out = Vec::new();
        let err = write_summary(&mut out, &Measurements::new(), Dimension::Tokens).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyInput));

        // Token-only measurements have no word dimension to report.
        let err = write_summary(&mut out, &sample(), Dimension::Words).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyInput));
    }
}
