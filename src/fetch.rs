//! Remote corpus acquisition: download the books archive and unpack it.

use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::constants::fetch::MAX_DOWNLOAD_BYTES;
use crate::errors::DatasetError;

/// Download the books archive to `zip_path` unless it is already there.
///
/// Returns `true` when a download happened, `false` when the cached file
/// was reused. The body is streamed into a temporary file next to the
/// destination and moved into place only after the full response arrived.
pub fn ensure_books_archive(zip_path: &Path, url: &str) -> Result<bool, DatasetError> {
    if zip_path.exists() {
        debug!(path = %zip_path.display(), "books archive already present");
        return Ok(false);
    }
    if let Some(parent) = zip_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    info!(url, "downloading books archive");
    let fetch_err = |reason: String| DatasetError::NetworkFetch {
        url: url.to_string(),
        reason,
    };
    let mut response = ureq::get(url)
        .call()
        .map_err(|err| fetch_err(err.to_string()))?;
    let body = response
        .body_mut()
        .with_config()
        .limit(MAX_DOWNLOAD_BYTES)
        .read_to_vec()
        .map_err(|err| fetch_err(err.to_string()))?;

    let parent = zip_path.parent().filter(|p| !p.as_os_str().is_empty());
    let staging = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))?;
    fs::write(staging.path(), &body)?;
    staging.persist(zip_path).map_err(|err| err.error)?;
    info!(path = %zip_path.display(), bytes = body.len(), "stored books archive");
    Ok(true)
}

/// Unpack `zip_path` into `dest`, replacing any previous extraction.
///
/// Returns the number of entries the archive held. A corrupt or unreadable
/// archive fails with [`DatasetError::ArchiveExtraction`]; the stale `dest`
/// tree is already gone by then, so callers should re-fetch and retry.
pub fn extract_archive(zip_path: &Path, dest: &Path) -> Result<usize, DatasetError> {
    let extraction_err = |reason: String| DatasetError::ArchiveExtraction {
        path: zip_path.to_path_buf(),
        reason,
    };
    let file = fs::File::open(zip_path)
        .map_err(|err| extraction_err(err.to_string()))?;
    let mut archive =
        ZipArchive::new(file).map_err(|err| extraction_err(err.to_string()))?;

    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;
    archive
        .extract(dest)
        .map_err(|err| extraction_err(err.to_string()))?;
    debug!(
        path = %dest.display(),
        entries = archive.len(),
        "extracted books archive"
    );
    Ok(archive.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_test_zip(path: &Path) {
        let mut zip = ZipWriter::new(fs::File::create(path).unwrap());
        let options = SimpleFileOptions::default();
        zip.start_file("book_a/p1.txt", options).unwrap();
        zip.write_all(b"first poem").unwrap();
        zip.start_file("book_a/p2.txt", options).unwrap();
        zip.write_all(b"second poem").unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn cached_archive_is_not_refetched() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("books_txt.zip");
        write_test_zip(&zip_path);
        // The URL is unreachable; the cache hit must short-circuit first.
        let downloaded =
            ensure_books_archive(&zip_path, "http://127.0.0.1:1/books_txt.zip").unwrap();
        assert!(!downloaded);
    }

    #[test]
    fn extraction_replaces_a_stale_tree() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("books_txt.zip");
        write_test_zip(&zip_path);

        let dest = dir.path().join("full_length");
        fs::create_dir_all(dest.join("old_book")).unwrap();
        fs::write(dest.join("old_book/stale.txt"), "stale").unwrap();

        let entries = extract_archive(&zip_path, &dest).unwrap();
        assert_eq!(entries, 2);
        assert!(dest.join("book_a/p1.txt").exists());
        assert!(!dest.join("old_book").exists());
    }

    #[test]
    fn corrupt_archive_is_reported() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("books_txt.zip");
        fs::write(&zip_path, b"not a zip archive").unwrap();
        let err = extract_archive(&zip_path, &dir.path().join("full_length")).unwrap_err();
        assert!(matches!(err, DatasetError::ArchiveExtraction { .. }));
    }
}
