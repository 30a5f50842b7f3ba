//! Filesystem-based output service implementation

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::application::OutputService;
use crate::generation::PromptError;

/// Output service that writes rendered prompts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutputService {
    fn ensure_parent_directory(&self, path: &Path) -> Result<(), PromptError> {
        // A bare file name has an empty parent: nothing to create
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !parent.exists() {
            debug!(path = %parent.display(), "Creating output directory");
        }

        fs::create_dir_all(parent).map_err(|source| PromptError::Directory {
            path: parent.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), PromptError> {
        fs::write(path, contents).map_err(|source| PromptError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
