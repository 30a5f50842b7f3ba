//! Port interfaces for the rendering domain

use std::path::Path;

use crate::generation::{PromptError, TemplateContext};

/// Reads input files (templates and configs)
pub trait FileReader: Send + Sync {
    /// Read the whole file at `path` as UTF-8 text
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Compiles and executes prompt templates
pub trait TemplateEngine: Send + Sync {
    /// A parsed template, ready to execute
    type Compiled;

    /// Parse `source`. `path` is only used for error reporting.
    fn parse(&self, path: &Path, source: &str) -> Result<Self::Compiled, PromptError>;

    /// Execute a parsed template against `context`
    fn execute(
        &self,
        template: &Self::Compiled,
        context: &TemplateContext,
    ) -> Result<String, PromptError>;
}
