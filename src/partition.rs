//! Deterministic train/test partitioning and zip dataset assembly.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tempfile::NamedTempFile;
use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::constants::partition::{TEST_LABEL, TRAIN_LABEL};
use crate::corpus::ItemId;
use crate::errors::DatasetError;
use crate::types::ArchivePath;

/// The outcome of one shuffle-and-split pass over the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionAssignment {
    /// Items in the training split, in shuffled order.
    pub train: Vec<ItemId>,
    /// Items in the test split, in shuffled order.
    pub test: Vec<ItemId>,
}

impl PartitionAssignment {
    /// Total number of items across both splits.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// True when neither split holds any items.
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }
}

/// Shuffle `ids` with a fixed-seed generator and cut at
/// `floor(train_fraction * n)`.
///
/// The input is canonically sorted before shuffling, so the assignment
/// depends only on the set of ids, the seed, and the fraction; the order
/// callers enumerated the corpus in does not matter.
pub fn split_ids(ids: &[ItemId], seed: u64, train_fraction: f64) -> PartitionAssignment {
    let mut ordered: Vec<ItemId> = ids.to_vec();
    ordered.sort();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ordered.shuffle(&mut rng);

    let train_size = (train_fraction * ordered.len() as f64) as usize;
    let test = ordered.split_off(train_size);
    PartitionAssignment {
        train: ordered,
        test,
    }
}

/// Build the dataset zip at `out_path` from a finished assignment.
///
/// Each entry lands at `{split}/{group}/{item}` with `marker` prepended to
/// the text `read_text` returns for it. The archive is written to a
/// temporary file in the destination directory and moved into place once
/// complete, so a failed run never leaves a truncated archive behind.
pub fn write_archive<F>(
    out_path: &Path,
    assignment: &PartitionAssignment,
    marker: &str,
    mut read_text: F,
) -> Result<(), DatasetError>
where
    F: FnMut(&ItemId) -> io::Result<String>,
{
    let parent = out_path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }
    let staging = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))?;
    let mut zip = ZipWriter::new(staging);
    let options = SimpleFileOptions::default();

    let splits = [
        (TRAIN_LABEL, &assignment.train),
        (TEST_LABEL, &assignment.test),
    ];
    for (label, ids) in splits {
        for id in ids {
            let item_io = |source: io::Error| DatasetError::PartitionIo {
                group: id.group.clone(),
                item: id.item.clone(),
                source,
            };
            let text = read_text(id).map_err(item_io)?;
            let entry_name: ArchivePath = format!("{label}/{}/{}", id.group, id.item);
            zip.start_file(&entry_name, options)
                .map_err(|err| item_io(io::Error::other(err)))?;
            zip.write_all(marker.as_bytes()).map_err(item_io)?;
            zip.write_all(text.as_bytes()).map_err(item_io)?;
        }
    }

    let staging = zip.finish().map_err(io::Error::other)?;
    staging.persist(out_path).map_err(|err| err.error)?;
    debug!(
        path = %out_path.display(),
        train = assignment.train.len(),
        test = assignment.test.len(),
        "wrote dataset archive"
    );
    Ok(())
}
