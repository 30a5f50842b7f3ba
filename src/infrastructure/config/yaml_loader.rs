//! YAML config loader
//!
//! A prompt's `config.yaml` is a single YAML mapping whose keys become
//! template variables. Nested mappings and sequences are kept as structured
//! values so templates can index and loop over them.

use std::path::Path;

use tracing::debug;

use crate::generation::{FileReader, FileRole, PromptError, TemplateContext};

/// Read the config at `path` and build the template context from it.
///
/// A non-empty `user_query` is stored under `user_query`, replacing any value
/// the config defines for that key.
pub fn load_context(
    reader: &dyn FileReader,
    path: &Path,
    user_query: Option<&str>,
) -> Result<TemplateContext, PromptError> {
    let content = reader
        .read_to_string(path)
        .map_err(|e| PromptError::read(FileRole::Config, path, e))?;

    let mut context = parse_context(&content, path)?;
    context.overlay_user_query(user_query);

    if context.is_empty() {
        debug!(path = %path.display(), "Config defines no variables");
    }
    debug!(
        path = %path.display(),
        variables = context.len(),
        "Loaded config context"
    );
    Ok(context)
}

/// Parse YAML text into a template context.
///
/// An empty document (no content, only comments, or `null`) yields an empty
/// context. Any other top level than a mapping is rejected. Merge keys are
/// applied, so `<<: *base` copies the anchored mapping's entries.
pub fn parse_context(content: &str, path: &Path) -> Result<TemplateContext, PromptError> {
    if is_blank_document(content) {
        return Ok(TemplateContext::new());
    }

    let parse_error = |e: serde_yaml::Error| PromptError::config_parse(path, e.to_string());

    let mut value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    // `<<: *anchor` merge keys are resolved before decoding
    value.apply_merge().map_err(parse_error)?;

    let parsed: Option<TemplateContext> = serde_yaml::from_value(value).map_err(parse_error)?;
    Ok(parsed.unwrap_or_default())
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
