//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default service base URL
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

/// Default directory for downloaded artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: Option<String>,
    pub output_dir: Option<String>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            server: Some(DEFAULT_SERVER.to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            server: other.server.or(self.server),
            output_dir: other.output_dir.or(self.output_dir),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the server base URL, or the default if not set
    pub fn server_or_default(&self) -> String {
        self.server
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }

    /// Get the output directory, or the default if not set
    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Get the notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_field() {
        let config = AppConfig::defaults();
        assert_eq!(config.server.as_deref(), Some(DEFAULT_SERVER));
        assert_eq!(config.output_dir.as_deref(), Some(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.notify, Some(false));
    }

    #[test]
    fn empty_has_no_values() {
        let config = AppConfig::empty();
        assert!(config.server.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.notify.is_none());
    }

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            server: Some("http://a:8000".to_string()),
            output_dir: Some("out-a".to_string()),
            notify: Some(false),
        };
        let other = AppConfig {
            server: Some("http://b:9000".to_string()),
            output_dir: None,
            notify: Some(true),
        };

        let merged = base.merge(other);
        assert_eq!(merged.server.as_deref(), Some("http://b:9000"));
        assert_eq!(merged.output_dir.as_deref(), Some("out-a"));
        assert_eq!(merged.notify, Some(true));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.server_or_default(), DEFAULT_SERVER);
        assert_eq!(config.output_dir_or_default(), DEFAULT_OUTPUT_DIR);
        assert!(!config.notify_or_default());
    }
}
