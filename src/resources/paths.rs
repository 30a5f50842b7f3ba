//! Path derivation for prompt resources.
//!
//! Every prompt lives under `resources/<category>/<topic>/`, which holds its
//! `config.yaml` and receives the rendered `prompt.txt`. Topics of the
//! `topics` category share a single template, other categories keep one
//! template per topic.

use std::path::PathBuf;

use crate::resources::layout::{
    CONFIG_FILE_NAME, DEFAULT_CATEGORY, DEFAULT_TOPIC, OUTPUT_FILE_NAME, RESOURCES_DIR,
    SHARED_TEMPLATE_CATEGORY, SHARED_TEMPLATE_PATH, TEMPLATE_FILE_NAME,
};

/// The three files involved in rendering one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    pub template: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// Paths supplied explicitly by the caller. Each one wins over derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub template: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Derives prompt paths for topics of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    category: String,
}

impl PathResolver {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// Derive template, config and output paths for `topic`.
    ///
    /// An empty category yields `resources//<topic>/...`; the doubled
    /// separator is kept as-is.
    pub fn derive(&self, topic: &str) -> PathSet {
        let base = format!("{RESOURCES_DIR}/{}/{topic}", self.category);

        let template = if self.category == SHARED_TEMPLATE_CATEGORY {
            SHARED_TEMPLATE_PATH.to_string()
        } else {
            format!("{base}/{TEMPLATE_FILE_NAME}")
        };

        PathSet {
            template: PathBuf::from(template),
            config: PathBuf::from(format!("{base}/{CONFIG_FILE_NAME}")),
            output: PathBuf::from(format!("{base}/{OUTPUT_FILE_NAME}")),
        }
    }
}

/// Shorthand for `PathResolver::new(category).derive(topic)`.
pub fn derive(category: &str, topic: &str) -> PathSet {
    PathResolver::new(category).derive(topic)
}

/// Resolve the final paths for a prompt invocation.
///
/// `None` and empty strings both count as unset for category and topic, which
/// then fall back to `topics` and `git`. Overrides are taken as-is; derivation
/// is only consulted when at least one of them is missing.
pub fn resolve(category: Option<&str>, topic: Option<&str>, overrides: PathOverrides) -> PathSet {
    match (overrides.template, overrides.config, overrides.output) {
        (Some(template), Some(config), Some(output)) => PathSet {
            template,
            config,
            output,
        },
        (template, config, output) => {
            let category = non_empty(category).unwrap_or(DEFAULT_CATEGORY);
            let topic = non_empty(topic).unwrap_or(DEFAULT_TOPIC);
            let derived = derive(category, topic);

            PathSet {
                template: template.unwrap_or(derived.template),
                config: config.unwrap_or(derived.config),
                output: output.unwrap_or(derived.output),
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_paths(set: &PathSet, template: &str, config: &str, output: &str) {
        assert_eq!(set.template.to_str(), Some(template));
        assert_eq!(set.config.to_str(), Some(config));
        assert_eq!(set.output.to_str(), Some(output));
    }

    #[test]
    fn test_derive_topics_category_shares_template() {
        let set = derive("topics", "demo");
        assert_paths(
            &set,
            "resources/topics/template.yaml",
            "resources/topics/demo/config.yaml",
            "resources/topics/demo/prompt.txt",
        );
    }

    #[test]
    fn test_derive_other_category_keeps_template_in_topic_folder() {
        let set = derive("chart", "flowchart");
        assert_paths(
            &set,
            "resources/chart/flowchart/template.yaml",
            "resources/chart/flowchart/config.yaml",
            "resources/chart/flowchart/prompt.txt",
        );
    }

    #[test]
    fn test_derive_empty_category_keeps_double_slash() {
        let set = derive("", "basic");
        assert_paths(
            &set,
            "resources//basic/template.yaml",
            "resources//basic/config.yaml",
            "resources//basic/prompt.txt",
        );
    }

    #[test]
    fn test_resolve_defaults_to_topics_git() {
        let set = resolve(None, None, PathOverrides::default());
        assert_eq!(set, derive("topics", "git"));
        assert_paths(
            &set,
            "resources/topics/template.yaml",
            "resources/topics/git/config.yaml",
            "resources/topics/git/prompt.txt",
        );
    }

    #[test]
    fn test_resolve_treats_empty_strings_as_unset() {
        let set = resolve(Some(""), Some(""), PathOverrides::default());
        assert_eq!(set, derive("topics", "git"));
    }

    #[test]
    fn test_resolve_all_overrides_ignore_category_and_topic() {
        let overrides = PathOverrides {
            template: Some(PathBuf::from("template.yaml")),
            config: Some(PathBuf::from("config.yaml")),
            output: Some(PathBuf::from("output.txt")),
        };
        let set = resolve(Some("topics"), Some("ignored"), overrides);
        assert_paths(&set, "template.yaml", "config.yaml", "output.txt");
    }

    #[test]
    fn test_resolve_partial_overrides_fill_from_derivation() {
        let overrides = PathOverrides {
            config: Some(PathBuf::from("/custom/config.yaml")),
            ..Default::default()
        };
        let set = resolve(Some("demo"), Some("hello"), overrides);
        assert_paths(
            &set,
            "resources/demo/hello/template.yaml",
            "/custom/config.yaml",
            "resources/demo/hello/prompt.txt",
        );
    }

    proptest! {
        #[test]
        fn prop_non_shared_category_paths(category in "[a-z]{1,12}", topic in "[a-z0-9_-]{0,12}") {
            prop_assume!(category != "topics");
            let set = derive(&category, &topic);
            let base = format!("resources/{category}/{topic}");
            prop_assert_eq!(set.template.to_str().unwrap(), format!("{base}/template.yaml"));
            prop_assert_eq!(set.config.to_str().unwrap(), format!("{base}/config.yaml"));
            prop_assert_eq!(set.output.to_str().unwrap(), format!("{base}/prompt.txt"));
        }

        #[test]
        fn prop_topics_template_is_constant(topic in "[a-z0-9_-]{0,12}") {
            let set = derive("topics", &topic);
            prop_assert_eq!(set.template.to_str().unwrap(), "resources/topics/template.yaml");
            prop_assert_eq!(
                set.config.to_str().unwrap(),
                format!("resources/topics/{topic}/config.yaml")
            );
        }

        #[test]
        fn prop_derive_is_idempotent(category in "[a-z]{0,8}", topic in "[a-z]{0,8}") {
            prop_assert_eq!(derive(&category, &topic), derive(&category, &topic));
        }
    }
}
