//! Environment-driven settings, read once at startup and passed down
//! explicitly.

pub const LOG_ENV: &str = "TEXT_NOTES_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub use_color: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { use_color: true, log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_color = lookup("NO_COLOR").is_none();
        let log_filter = lookup(LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { use_color, log_filter }
    }
}
