//! Service configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Username the bot answers to in `/command@username`
    #[serde(default = "default_bot_username")]
    pub bot_username: String,

    /// Appended to anything the bot could not make sense of
    #[serde(default = "default_unknown_suffix")]
    pub unknown_suffix: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bot_username: default_bot_username(),
            unknown_suffix: default_unknown_suffix(),
        }
    }
}

fn default_bot_username() -> String {
    "roster_bot".to_string()
}

fn default_unknown_suffix() -> String {
    "❓".to_string()
}
