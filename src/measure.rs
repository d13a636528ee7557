use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{CorpusEntry, ItemId};
use crate::errors::DatasetError;
use crate::tokenizer::TokenCounter;

/// Scalar measurements for one corpus item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    /// Subword token count (marker included when the pipeline prepends one).
    pub token_count: usize,
    /// Whitespace-delimited word count of the raw text, when requested.
    pub word_count: Option<usize>,
}

/// Mapping from item identifier to its measurements.
///
/// Keyed and iterated in `(group, item)` order; every enumerated item appears
/// exactly once.
pub type Measurements = BTreeMap<ItemId, ItemCounts>;

/// Number of whitespace-delimited words in `text`.
///
/// No normalization or punctuation stripping, matching how the corpus was
/// originally surveyed.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Applies the tokenizer (and optionally a word counter) to every enumerated
/// item.
///
/// The token counter is an injected dependency rather than ambient state so
/// tests can substitute a fake. Read-only with respect to the file system.
pub struct MeasurementPipeline<T> {
    counter: T,
    marker: Option<String>,
    count_words: bool,
}

impl<T: TokenCounter> MeasurementPipeline<T> {
    /// Create a pipeline around `counter` with no marker and no word counts.
    pub fn new(counter: T) -> Self {
        Self {
            counter,
            marker: None,
            count_words: false,
        }
    }

    /// Prepend `marker` to each item's text before tokenizing.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Also record a word count per item (computed over the raw text, never
    /// the marker-prefixed form).
    pub fn with_word_counts(mut self, count_words: bool) -> Self {
        self.count_words = count_words;
        self
    }

    /// Measure a batch of in-memory `(id, text)` items.
    pub fn measure_texts<I>(&self, items: I) -> Result<Measurements, DatasetError>
    where
        I: IntoIterator<Item = (ItemId, String)>,
    {
        let mut measurements = Measurements::new();
        for (id, text) in items {
            let counts = self.measure_one(&text)?;
            debug!(
                group = %id.group,
                item = %id.item,
                tokens = counts.token_count,
                "measured item"
            );
            measurements.insert(id, counts);
        }
        Ok(measurements)
    }

    /// Measure enumerated corpus entries, reading each file's text.
    pub fn measure_entries(&self, entries: &[CorpusEntry]) -> Result<Measurements, DatasetError> {
        let mut measurements = Measurements::new();
        for entry in entries {
            let text = entry.read_text()?;
            let counts = self.measure_one(&text)?;
            debug!(
                group = %entry.id.group,
                item = %entry.id.item,
                tokens = counts.token_count,
                "measured item"
            );
            measurements.insert(entry.id.clone(), counts);
        }
        Ok(measurements)
    }

    fn measure_one(&self, text: &str) -> Result<ItemCounts, DatasetError> {
        let token_count = match &self.marker {
            Some(marker) => self.counter.count_tokens(&format!("{marker}{text}"))?,
            None => self.counter.count_tokens(text)?,
        };
        let word_count = self.count_words.then(|| word_count(text));
        Ok(ItemCounts {
            token_count,
            word_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WhitespaceTokenizer;

    fn items() -> Vec<(ItemId, String)> {
        vec![
            (ItemId::new("book_a", "one.txt"), "dve slova".to_string()),
            (
                ItemId::new("book_a", "two.txt"),
                "tri kratke slova".to_string(),
            ),
        ]
    }

    #[test]
    fn marker_is_tokenized_but_not_word_counted() {
        let pipeline = MeasurementPipeline::new(WhitespaceTokenizer)
            .with_marker("[POH] ")
            .with_word_counts(true);
        let measurements = pipeline.measure_texts(items()).unwrap();

        let counts = measurements[&ItemId::new("book_a", "one.txt")];
        // "[POH] dve slova" tokenizes to three whitespace tokens.
        assert_eq!(counts.token_count, 3);
        assert_eq!(counts.word_count, Some(2));
    }

    #[test]
    fn no_marker_counts_raw_text() {
        let pipeline = MeasurementPipeline::new(WhitespaceTokenizer);
        let measurements = pipeline.measure_texts(items()).unwrap();
        let counts = measurements[&ItemId::new("book_a", "two.txt")];
        assert_eq!(counts.token_count, 3);
        assert_eq!(counts.word_count, None);
    }

    #[test]
    fn every_item_appears_exactly_once() {
        let pipeline = MeasurementPipeline::new(WhitespaceTokenizer);
        let measurements = pipeline.measure_texts(items()).unwrap();
        assert_eq!(measurements.len(), 2);
    }
}
