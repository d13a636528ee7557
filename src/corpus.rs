use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use walkdir::WalkDir;

use crate::constants::corpus::SKIP_ROOT_FILE_MSG;
use crate::errors::DatasetError;
use crate::types::{GroupName, ItemName};

/// Identifier for a measured text unit: the book (group) it belongs to plus
/// its file name. Orders lexicographically by `(group, item)`, which gives the
/// canonical pre-shuffle order the partitioner relies on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId {
    /// Book/collection name (the group directory name).
    pub group: GroupName,
    /// Item file name within the group.
    pub item: ItemName,
}

impl ItemId {
    /// Build an identifier from group and item names.
    pub fn new(group: impl Into<GroupName>, item: impl Into<ItemName>) -> Self {
        Self {
            group: group.into(),
            item: item.into(),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.group, self.item)
    }
}

/// One enumerated corpus file: its identifier plus the on-disk path.
///
/// Text content is read lazily so both the measurement pipeline and the
/// partitioner observe read failures at the point they consume the file.
#[derive(Clone, Debug)]
pub struct CorpusEntry {
    /// Identifier derived from the directory layout.
    pub id: ItemId,
    path: PathBuf,
}

impl CorpusEntry {
    /// On-disk path of the item file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the item's full text content.
    pub fn read_text(&self) -> Result<String, DatasetError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Enumerator over a two-level corpus tree: one subdirectory per book, plain
/// text item files inside each.
///
/// Each [`CorpusRoot::scan`] call re-reads the tree, so repeated scans always
/// observe the current file-system state.
#[derive(Clone, Debug)]
pub struct CorpusRoot {
    root: PathBuf,
}

impl CorpusRoot {
    /// Create an enumerator rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Whether the root directory currently exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Walk the tree and return all `(group, item)` entries sorted by id.
    ///
    /// Fails with [`DatasetError::DirectoryNotFound`] when the root is absent
    /// and with [`DatasetError::CorpusLayout`] when a group directory contains
    /// further subdirectories, which the layout does not allow. Files directly
    /// under the root belong to no group and are skipped with a warning.
    pub fn scan(&self) -> Result<Vec<CorpusEntry>, DatasetError> {
        if !self.exists() {
            return Err(DatasetError::DirectoryNotFound(self.root.clone()));
        }
        let mut entries = Vec::new();
        for dirent in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name()
        {
            let dirent = dirent.map_err(|err| {
                DatasetError::Io(err.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("file-system walk lost a directory entry")
                }))
            })?;
            let depth = dirent.depth();
            if dirent.file_type().is_dir() {
                if depth == 2 {
                    return Err(DatasetError::CorpusLayout {
                        root: self.root.clone(),
                        details: format!(
                            "nested directory '{}' inside a book directory",
                            dirent.path().display()
                        ),
                    });
                }
                continue;
            }
            if depth == 1 {
                warn!(path = %dirent.path().display(), "{SKIP_ROOT_FILE_MSG}");
                continue;
            }
            let Some((group, item)) = names_for(self.root.as_path(), dirent.path()) else {
                return Err(DatasetError::CorpusLayout {
                    root: self.root.clone(),
                    details: format!("non-UTF-8 path '{}'", dirent.path().display()),
                });
            };
            entries.push(CorpusEntry {
                id: ItemId::new(group, item),
                path: dirent.path().to_path_buf(),
            });
        }
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }
}

fn names_for(root: &Path, path: &Path) -> Option<(GroupName, ItemName)> {
    let rel = path.strip_prefix(root).ok()?;
    let mut components = rel.components();
    let group = components.next()?.as_os_str().to_str()?.to_string();
    let item = components.next()?.as_os_str().to_str()?.to_string();
    Some((group, item))
}
