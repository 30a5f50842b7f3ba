//! Use case for rendering a prompt from a template and a YAML config

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::application::{OutputService, Renderer};
use crate::generation::{FileReader, FileRole, PromptError, TemplateEngine};
use crate::infrastructure::config::load_context;
use crate::infrastructure::generation::TeraTemplateEngine;
use crate::infrastructure::input::FileSystemReader;
use crate::infrastructure::output::FileSystemOutputService;

/// Renders prompts with an injected template engine, file reader and output service.
///
/// The pipeline is linear: read and parse the template, read and parse the
/// config (with the user query overlaid), execute, then emit. Nothing is
/// written until execution has succeeded.
pub struct PromptRenderer<E: TemplateEngine> {
    engine: E,
    reader: Box<dyn FileReader>,
    output: Box<dyn OutputService>,
}

impl<E: TemplateEngine> PromptRenderer<E> {
    pub fn new(engine: E, reader: Box<dyn FileReader>, output: Box<dyn OutputService>) -> Self {
        Self {
            engine,
            reader,
            output,
        }
    }

    /// Run the pipeline up to execution and return the rendered text
    pub fn render(
        &self,
        template_path: &Path,
        config_path: &Path,
        user_query: Option<&str>,
    ) -> Result<String, PromptError> {
        let template = self.load_template(template_path)?;
        let context = load_context(self.reader.as_ref(), config_path, user_query)?;

        let rendered = self.engine.execute(&template, &context)?;
        debug!(
            template = %template_path.display(),
            config = %config_path.display(),
            bytes = rendered.len(),
            "Rendered prompt"
        );
        Ok(rendered)
    }

    fn load_template(&self, path: &Path) -> Result<E::Compiled, PromptError> {
        let source = self
            .reader
            .read_to_string(path)
            .map_err(|e| PromptError::read(FileRole::Template, path, e))?;
        self.engine.parse(path, &source)
    }
}

impl PromptRenderer<TeraTemplateEngine> {
    /// Renderer backed by Tera and the local filesystem
    pub fn with_filesystem() -> Self {
        Self::new(
            TeraTemplateEngine::new(),
            Box::new(FileSystemReader::new()),
            Box::new(FileSystemOutputService::new()),
        )
    }
}

impl<E: TemplateEngine> Renderer for PromptRenderer<E> {
    fn render_to_file(
        &self,
        template_path: &Path,
        config_path: &Path,
        output_path: &Path,
        user_query: Option<&str>,
    ) -> Result<(), PromptError> {
        let rendered = self.render(template_path, config_path, user_query)?;

        self.output.ensure_parent_directory(output_path)?;
        self.output.write_file(output_path, &rendered)?;

        info!(output = %output_path.display(), "Prompt written");
        Ok(())
    }

    fn render_to_stdout(
        &self,
        template_path: &Path,
        config_path: &Path,
        user_query: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<(), PromptError> {
        let rendered = self.render(template_path, config_path, user_query)?;
        writeln!(out, "{rendered}").map_err(PromptError::Stdout)
    }
}
