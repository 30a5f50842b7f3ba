//! The `prompt` command: resolve paths, render, report

use std::io::Write;

use tracing::debug;

use crate::application::{RenderRequest, Renderer};
use crate::generation::PromptError;
use crate::resources::paths::{PathOverrides, resolve};

/// Values the `prompt` command runs with
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    pub category: Option<String>,
    pub topic: Option<String>,
    pub overrides: PathOverrides,
    pub preview: bool,
    pub user_query: Option<String>,
}

impl PromptOptions {
    /// Resolve paths (overrides first, then category/topic defaults)
    pub fn to_request(&self) -> RenderRequest {
        let paths = resolve(
            self.category.as_deref(),
            self.topic.as_deref(),
            self.overrides.clone(),
        );
        RenderRequest::new(paths, self.preview, self.user_query.clone())
    }
}

/// Generates or previews a prompt through an injected [`Renderer`]
pub struct PromptCommand<'a, W: Write> {
    out: W,
    renderer: &'a dyn Renderer,
}

impl<'a, W: Write> PromptCommand<'a, W> {
    pub fn new(out: W, renderer: &'a dyn Renderer) -> Self {
        Self { out, renderer }
    }

    /// Run the command and return the request it executed.
    ///
    /// Previews go to `out` as-is; file renders are followed by a
    /// `Prompt saved to: <path>` line on `out`.
    pub fn run(&mut self, options: &PromptOptions) -> Result<RenderRequest, PromptError> {
        let request = options.to_request();
        debug!(?request, "Resolved prompt request");

        match &request.output_path {
            None => self.renderer.render_to_stdout(
                &request.template_path,
                &request.config_path,
                request.user_query(),
                &mut self.out,
            )?,
            Some(output_path) => {
                self.renderer.render_to_file(
                    &request.template_path,
                    &request.config_path,
                    output_path,
                    request.user_query(),
                )?;
                writeln!(self.out, "Prompt saved to: {}", output_path.display())
                    .map_err(PromptError::Stdout)?;
            }
        }

        Ok(request)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
