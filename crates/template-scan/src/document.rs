//! Document loading from the filesystem.
//!
//! A [`Document`] is the whole target file held in memory as text, immutable
//! for the duration of the run. Loading checks the file size up front, reads
//! the raw bytes, and decodes them as UTF-8 in a separate step so that I/O
//! failures and decoding failures stay distinguishable.

use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};

/// Maximum allowed file size in bytes (10MB).
///
/// Component files are typically a few hundred KB at most; anything larger
/// is rejected before reading to bound memory usage.
const MAX_FILE_SIZE: u64 = 10_000_000; // 10MB

/// Large file warning threshold (1MB).
const LARGE_FILE_THRESHOLD: u64 = 1_000_000; // 1MB

/// An in-memory text buffer loaded from disk, plus the path it came from.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Loads a document from disk, decoding its contents as UTF-8.
    ///
    /// # Errors
    ///
    /// - `ScanError::Io` - file missing, unreadable, or metadata inaccessible
    /// - `ScanError::FileTooLarge` - file exceeds the 10MB hard limit
    /// - `ScanError::Decode` - bytes are not valid UTF-8
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use template_scan::document::Document;
    ///
    /// # fn example() -> template_scan::error::Result<()> {
    /// let doc = Document::load("src/components/AnalysisPanel.vue")?;
    /// println!("loaded {} bytes", doc.text().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading document from disk: {:?}", path);

        let metadata = std::fs::metadata(path).map_err(|e| {
            match e.kind() {
                std::io::ErrorKind::NotFound => {
                    tracing::debug!("File not found: {:?}", path);
                }
                std::io::ErrorKind::PermissionDenied => {
                    tracing::warn!("Permission denied: {:?}", path);
                }
                _ => {
                    tracing::error!("IO error reading metadata for {:?}: {}", path, e);
                }
            }
            ScanError::Io(e)
        })?;

        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            tracing::error!(
                "Document exceeds maximum size: {} bytes (limit: {} bytes)",
                size,
                MAX_FILE_SIZE
            );
            return Err(ScanError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: MAX_FILE_SIZE,
            });
        }
        if size > LARGE_FILE_THRESHOLD {
            tracing::warn!(
                "Document is large: {} bytes for {:?}. Typical components are <100KB.",
                size,
                path
            );
        }

        let bytes = std::fs::read(path).map_err(|e| {
            tracing::error!("IO error reading file {:?}: {}", path, e);
            ScanError::Io(e)
        })?;

        let text = String::from_utf8(bytes).map_err(|e| {
            tracing::error!("Document is not valid UTF-8: {:?}", path);
            ScanError::Decode {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        tracing::debug!(
            "Successfully loaded document: {:?} ({} bytes)",
            path,
            text.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "test content";
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let doc = Document::load(temp_file.path()).unwrap();

        assert_eq!(doc.text(), content);
        assert_eq!(doc.path(), temp_file.path());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Document::load("/nonexistent/file/path.vue");

        assert!(result.is_err());
        match result {
            Err(ScanError::Io(_)) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let doc = Document::load(temp_file.path()).unwrap();

        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_load_utf8_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "Hello 世界 🌍 Привет";
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let doc = Document::load(temp_file.path()).unwrap();

        assert_eq!(doc.text(), content);
    }

    #[test]
    fn test_load_non_utf8_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xFF, 0xFE, 0xFD]).unwrap();
        temp_file.flush().unwrap();

        let result = Document::load(temp_file.path());

        assert!(result.is_err());
        match result {
            Err(ScanError::Decode { .. }) => {}
            _ => panic!("Expected Decode error for non-UTF8 content"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_load_permission_denied() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"test").unwrap();
        temp_file.flush().unwrap();

        let mut perms = fs::metadata(temp_file.path()).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(temp_file.path(), perms.clone()).unwrap();

        let result = Document::load(temp_file.path());

        // Restore permissions for cleanup
        perms.set_mode(0o644);
        let _ = fs::set_permissions(temp_file.path(), perms);

        assert!(result.is_err());
        match result {
            Err(ScanError::Io(_)) => {}
            _ => panic!("Expected Io error for permission denied"),
        }
    }

    #[test]
    fn test_file_size_limit_constant() {
        assert_eq!(MAX_FILE_SIZE, 10_000_000);
        assert_eq!(LARGE_FILE_THRESHOLD, 1_000_000);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_file_exceeding_max_size() {
        use std::os::unix::fs::FileExt;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let large_file = temp_dir.path().join("large.vue");

        // Sparse file: one byte written past the limit, no disk allocation
        let file = std::fs::File::create(&large_file).unwrap();
        let beyond_limit = MAX_FILE_SIZE + 1;
        file.write_at(b"x", beyond_limit).unwrap();

        let result = Document::load(&large_file);

        assert!(result.is_err(), "Should reject files > MAX_FILE_SIZE");
        match result {
            Err(ScanError::FileTooLarge { size, limit, .. }) => {
                assert!(size > limit);
                assert_eq!(limit, MAX_FILE_SIZE);
            }
            _ => panic!("Expected FileTooLarge for oversized file"),
        }
    }
}
