#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Centralized constants used across workflows.
pub mod constants;
/// Corpus enumeration over the two-level book/item directory layout.
pub mod corpus;
/// Remote books archive download and extraction.
pub mod fetch;
/// Histogram artifact rendering.
pub mod histogram;
/// Token and word measurement pipeline.
pub mod measure;
/// Train/test partitioning and dataset archive output.
pub mod partition;
/// Statistics summaries and ranking reports.
pub mod report;
/// Descriptive statistics over numeric observations.
pub mod stats;
/// Long-item threshold filtering and CSV output.
pub mod threshold;
/// Tokenizer collaborators.
pub mod tokenizer;
/// Shared type aliases.
pub mod types;

mod errors;

pub use corpus::{CorpusEntry, CorpusRoot, ItemId};
pub use errors::DatasetError;
pub use histogram::{HistogramSink, SvgHistogram};
pub use measure::{ItemCounts, MeasurementPipeline, Measurements, word_count};
pub use partition::{PartitionAssignment, split_ids, write_archive};
pub use report::Dimension;
pub use threshold::{LongItemRecord, long_items};
pub use tokenizer::{PretrainedTokenizer, TokenCounter, WhitespaceTokenizer};
pub use types::{GroupName, ItemName};
