//! Environment-driven configuration.

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "GQLMAP_LOG";
/// Environment variable enabling hierarchical log output.
pub const LOG_TREE_ENV: &str = "GQLMAP_LOG_TREE";
/// Log filter used when none is configured or the configured one is invalid.
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Runtime configuration for logging.
///
/// Compiler behaviour is not configured here; hooks are wired through
/// [`SchemaCompiler::builder`](crate::SchemaCompiler::builder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directives, e.g. `gqlmap_types=debug`.
    pub log_filter: String,
    /// Render spans as an indented tree instead of flat lines.
    pub log_tree: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_tree: false,
        }
    }
}

impl Config {
    /// Read [`LOG_ENV`] and [`LOG_TREE_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(tree) = lookup(LOG_TREE_ENV) {
            config.log_tree = matches!(tree.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }

    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    #[must_use]
    pub fn with_log_tree(mut self, enabled: bool) -> Self {
        self.log_tree = enabled;
        self
    }
}
