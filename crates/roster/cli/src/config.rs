//! Configuration for the roster console

use roster_service::ServiceConfig;
use serde::{Deserialize, Serialize};

/// Main console configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Chat configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// The simulated chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Group every console line is posted to
    #[serde(default = "default_group_id")]
    pub group_id: i64,

    #[serde(default = "default_bot_username")]
    pub bot_username: String,

    #[serde(default = "default_unknown_suffix")]
    pub unknown_suffix: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            bot_username: default_bot_username(),
            unknown_suffix: default_unknown_suffix(),
        }
    }
}

impl ChatConfig {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            bot_username: self.bot_username.clone(),
            unknown_suffix: self.unknown_suffix.clone(),
        }
    }
}

// Default value helpers
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_group_id() -> i64 {
    -1
}

fn default_bot_username() -> String {
    ServiceConfig::default().bot_username
}

fn default_unknown_suffix() -> String {
    ServiceConfig::default().unknown_suffix
}

impl RosterConfig {
    /// Load configuration from defaults, an optional file, then `ROSTER_`
    /// environment variables (`ROSTER_CHAT__GROUP_ID=-42`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&RosterConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(text: &str) -> RosterConfig {
        config::Config::builder()
            .add_source(config::Config::try_from(&RosterConfig::default()).unwrap())
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert_eq!(config.chat.group_id, -1);
        assert_eq!(config.chat.service_config(), ServiceConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            [logging]
            json = true

            [chat]
            group_id = -42
            bot_username = "meetup_bot"
            "#,
        );
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.chat.group_id, -42);
        assert_eq!(config.chat.service_config().bot_username, "meetup_bot");
        assert_eq!(config.chat.unknown_suffix, "❓");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = RosterConfig::load(Some("/nonexistent/roster")).unwrap();
        assert_eq!(config.chat.bot_username, "roster_bot");
    }
}
