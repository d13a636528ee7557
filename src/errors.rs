use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{GroupName, ItemName};

/// Error type for corpus enumeration, measurement, partitioning, and
/// archive-handling failures.
///
/// Every variant is fatal to its workflow; there is no retry or partial-result
/// recovery. The one soft case is [`DatasetError::PrerequisiteMissing`], which
/// callers surface as an instructive message and a clean exit.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("expected input directory '{dir}' is missing: {instruction}")]
    PrerequisiteMissing { dir: PathBuf, instruction: String },
    #[error("statistics require at least one observation")]
    EmptyInput,
    #[error("corpus root '{0}' does not exist or is not a directory")]
    DirectoryNotFound(PathBuf),
    #[error("corpus root '{root}' has an unexpected layout: {details}")]
    CorpusLayout { root: PathBuf, details: String },
    #[error("failed to read '{group}/{item}' while building the dataset archive: {source}")]
    PartitionIo {
        group: GroupName,
        item: ItemName,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch '{url}': {reason}")]
    NetworkFetch { url: String, reason: String },
    #[error("failed to extract archive '{path}': {reason}")]
    ArchiveExtraction { path: PathBuf, reason: String },
    #[error("tokenizer failure: {0}")]
    Tokenizer(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
