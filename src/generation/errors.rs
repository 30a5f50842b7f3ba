//! Error types for the prompt rendering pipeline

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file a read failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Template,
    Config,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Template => write!(f, "template"),
            FileRole::Config => write!(f, "config"),
        }
    }
}

/// Errors that can occur while rendering a prompt
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read {role} file {}", path.display())]
    Read {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("failed to parse template {}: {reason}", path.display())]
    TemplateSyntax { path: PathBuf, reason: String },

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("failed to create directory {}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to standard output")]
    Stdout(#[source] std::io::Error),
}

impl PromptError {
    pub fn read(role: FileRole, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            role,
            path: path.into(),
            source,
        }
    }

    pub fn config_parse<S: Into<String>>(path: impl Into<PathBuf>, reason: S) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn template_syntax<S: Into<String>>(path: impl Into<PathBuf>, reason: S) -> Self {
        Self::TemplateSyntax {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn template_render<S: Into<String>>(reason: S) -> Self {
        Self::TemplateRender(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_names_role_and_path() {
        let error = PromptError::read(
            FileRole::Config,
            "resources/demo/hello/config.yaml",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        assert!(matches!(
            error,
            PromptError::Read {
                role: FileRole::Config,
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "failed to read config file resources/demo/hello/config.yaml"
        );
        let source = std::error::Error::source(&error).expect("io source");
        assert!(source.to_string().contains("No such file"));
    }

    #[test]
    fn test_config_parse_error_display() {
        let error = PromptError::config_parse("broken.yaml", "did not find expected node");
        assert_eq!(
            error.to_string(),
            "failed to parse YAML config broken.yaml: did not find expected node"
        );
    }

    #[test]
    fn test_template_errors_display() {
        let syntax = PromptError::template_syntax("template.yaml", "unexpected end");
        assert_eq!(
            syntax.to_string(),
            "failed to parse template template.yaml: unexpected end"
        );

        let render = PromptError::template_render("Filter `nonexistent` not found");
        assert!(matches!(render, PromptError::TemplateRender(_)));
        assert_eq!(
            render.to_string(),
            "template rendering failed: Filter `nonexistent` not found"
        );
    }

    #[test]
    fn test_file_role_display() {
        assert_eq!(FileRole::Template.to_string(), "template");
        assert_eq!(FileRole::Config.to_string(), "config");
    }
}
