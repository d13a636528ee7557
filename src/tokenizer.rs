use tokenizers::Tokenizer;
use tracing::info;

use crate::errors::DatasetError;

/// Tokenizer collaborator seam.
///
/// Implementations map raw text to a subword token count. The pipeline takes
/// this as an injected dependency so tests can substitute a fake.
pub trait TokenCounter {
    /// Number of tokens the tokenizer produces for `text`.
    fn count_tokens(&self, text: &str) -> Result<usize, DatasetError>;
}

/// Subword tokenizer loaded once from a named pretrained resource.
///
/// Stateless per call after loading, so a single instance can serve a whole
/// workflow.
pub struct PretrainedTokenizer {
    inner: Tokenizer,
}

impl PretrainedTokenizer {
    /// Load the tokenizer for `identifier` from the hub (or local cache).
    ///
    /// Load failure is fatal: no measurement can proceed without the
    /// tokenizer, so callers abort startup on error.
    pub fn from_pretrained(identifier: &str) -> Result<Self, DatasetError> {
        let inner = Tokenizer::from_pretrained(identifier, None).map_err(|err| {
            DatasetError::Tokenizer(format!("failed to load '{identifier}': {err}"))
        })?;
        info!(identifier, "loaded pretrained tokenizer");
        Ok(Self { inner })
    }
}

impl TokenCounter for PretrainedTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, DatasetError> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|err| DatasetError::Tokenizer(err.to_string()))?;
        Ok(encoding.get_ids().len())
    }
}

/// Trivial counter that treats each whitespace-delimited word as one token.
///
/// Used by tests and offline dry runs where the pretrained download is
/// unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl TokenCounter for WhitespaceTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, DatasetError> {
        Ok(text.split_whitespace().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_tokenizer_counts_words() {
        let counter = WhitespaceTokenizer;
        assert_eq!(counter.count_tokens("a b  c\nd").unwrap(), 4);
        assert_eq!(counter.count_tokens("").unwrap(), 0);
    }
}
