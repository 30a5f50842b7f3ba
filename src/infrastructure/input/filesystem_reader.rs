//! Filesystem-based file reader

use std::fs;
use std::path::Path;

use crate::generation::FileReader;

/// Reads templates and configs straight from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileReader for FileSystemReader {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "name: world").unwrap();

        let content = FileSystemReader::new().read_to_string(&path).unwrap();
        assert_eq!(content, "name: world");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let error = FileSystemReader::new()
            .read_to_string(&temp_dir.path().join("absent.yaml"))
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_non_utf8_is_invalid_data() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("binary.yaml");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let error = FileSystemReader::new().read_to_string(&path).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }
}
