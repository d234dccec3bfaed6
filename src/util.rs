//! Utility functions for ilrcheck.

use std::fs;
use std::path::Path;

use crate::error::{IlrError, Result};

/// Maximum record-file size that can be read into memory (50 MB).
///
/// Learner files for a large provider run to a few megabytes; anything near
/// this limit is almost certainly the wrong file.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50 MB

/// Read a file into a string with size limit protection.
///
/// # Errors
///
/// Returns an error if the file cannot be read or exceeds
/// [`MAX_FILE_SIZE`].
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| IlrError::storage(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(IlrError::malformed(format!(
            "file {} is too large ({} bytes, max {} bytes)",
            path.display(),
            size,
            MAX_FILE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| IlrError::storage(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_small_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("learners.json");
        fs::write(&path, "[]").unwrap();
        assert_eq!(read_to_string_limited(&path).unwrap(), "[]");
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let err = read_to_string_limited(Path::new("/nonexistent/learners.json")).unwrap_err();
        assert!(matches!(err, IlrError::Storage { .. }));
    }
}
