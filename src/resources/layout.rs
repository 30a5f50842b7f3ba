//! Compile-time defaults for locating prompt resources.

/// Root folder that holds every prompt category.
pub const RESOURCES_DIR: &str = "resources";

/// Category used when the caller leaves it unset.
pub const DEFAULT_CATEGORY: &str = "topics";

/// Topic used when the caller leaves it unset.
pub const DEFAULT_TOPIC: &str = "git";

/// Category whose topics all share one template file.
pub const SHARED_TEMPLATE_CATEGORY: &str = "topics";

/// Template shared by every topic of [`SHARED_TEMPLATE_CATEGORY`].
pub const SHARED_TEMPLATE_PATH: &str = "resources/topics/template.yaml";

pub const TEMPLATE_FILE_NAME: &str = "template.yaml";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const OUTPUT_FILE_NAME: &str = "prompt.txt";

/// Usage examples appended to `prompt --help` when present.
pub const HELP_EXAMPLES_PATH: &str = "resources/help/examples.md";

/// Context key the user query is injected under.
pub const USER_QUERY_KEY: &str = "user_query";
