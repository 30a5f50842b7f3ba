//! Tera-based template engine implementation

use std::path::Path;

use tera::Tera;
use tracing::debug;

use crate::generation::{PromptError, TemplateContext, TemplateEngine};

/// Name the single template is registered under inside its Tera instance
const TEMPLATE_NAME: &str = "prompt";

/// A template parsed into its own Tera instance
pub struct CompiledTemplate {
    tera: Tera,
}

/// Tera-based template engine
pub struct TeraTemplateEngine;

impl TeraTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for TeraTemplateEngine {
    type Compiled = CompiledTemplate;

    fn parse(&self, path: &Path, source: &str) -> Result<CompiledTemplate, PromptError> {
        let mut tera = Tera::default();
        // Prompts are plain text
        tera.autoescape_on(vec![]);

        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| PromptError::template_syntax(path, describe(&e)))?;

        debug!(path = %path.display(), bytes = source.len(), "Parsed template");
        Ok(CompiledTemplate { tera })
    }

    fn execute(
        &self,
        template: &CompiledTemplate,
        context: &TemplateContext,
    ) -> Result<String, PromptError> {
        template
            .tera
            .render(TEMPLATE_NAME, &context.to_tera_context())
            .map_err(|e| PromptError::template_render(describe(&e)))
    }
}

/// Flatten a Tera error and its causes into one line.
///
/// Tera keeps the useful part (parser position, missing variable name) in
/// the source chain rather than in the top-level message.
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
