//! Port interfaces for the application layer

use std::io::Write;
use std::path::Path;

use crate::generation::PromptError;

/// Service for writing rendered prompts to their destination
pub trait OutputService: Send + Sync {
    /// Create every missing parent directory of `path`
    fn ensure_parent_directory(&self, path: &Path) -> Result<(), PromptError>;

    /// Write `contents` to `path`, replacing any existing file
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), PromptError>;
}

/// Rendering operations exposed to the command layer
pub trait Renderer {
    /// Render the template against the config and write the result to `output_path`
    fn render_to_file(
        &self,
        template_path: &Path,
        config_path: &Path,
        output_path: &Path,
        user_query: Option<&str>,
    ) -> Result<(), PromptError>;

    /// Render the template against the config and print the result to `out`
    fn render_to_stdout(
        &self,
        template_path: &Path,
        config_path: &Path,
        user_query: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<(), PromptError>;
}
