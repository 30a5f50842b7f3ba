//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::resources::paths::PathSet;

/// One render invocation, built from resolved paths and command-line input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub template_path: PathBuf,
    pub config_path: PathBuf,
    /// `None` renders to stdout
    pub output_path: Option<PathBuf>,
    pub user_query: Option<String>,
}

impl RenderRequest {
    /// Build a request from resolved paths. An empty query counts as no query.
    pub fn new(paths: PathSet, preview: bool, user_query: Option<String>) -> Self {
        Self {
            template_path: paths.template,
            config_path: paths.config,
            output_path: (!preview).then_some(paths.output),
            user_query: user_query.filter(|q| !q.is_empty()),
        }
    }

    pub fn user_query(&self) -> Option<&str> {
        self.user_query.as_deref()
    }
}
