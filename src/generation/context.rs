//! Template context - the variables a prompt template is rendered against

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::resources::layout::USER_QUERY_KEY;

/// Key-value mapping handed to the template engine.
///
/// Deserializes only from a mapping, so a YAML document whose top level is a
/// list or a scalar is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateContext {
    variables: Map<String, JsonValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any existing value under `key`
    pub fn add_variable(&mut self, key: impl Into<String>, value: JsonValue) {
        self.variables.insert(key.into(), value);
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.variables.get(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Store a non-empty user query under `user_query`.
    ///
    /// `None` and `""` leave the context untouched.
    pub fn overlay_user_query(&mut self, user_query: Option<&str>) {
        if let Some(query) = user_query.filter(|q| !q.is_empty()) {
            self.add_variable(USER_QUERY_KEY, JsonValue::String(query.to_string()));
        }
    }

    /// Convert into the engine's context type
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}
