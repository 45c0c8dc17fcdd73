//! Roster console - a terminal stand-in for a group chat
//!
//! Replays a script, or reads standard input, one update per line, through the
//! command service backed by the in-memory profile store:
//! - `@alice /iam 29yo #nerd 🦊` edits alice's profile
//! - `@bob /loc 45.46 9.19 25` shares bob's location, accuracy in meters optional
//! - `@bob /whois 18,30yo ,10km` searches the group
//! - `/dump` prints the group's profiles as JSON

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use roster_service::CommandService;
use roster_store::InMemoryProfileStore;
use roster_types::GroupId;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;
mod error;
mod output;

pub use config::{ChatConfig, LoggingConfig, RosterConfig};
pub use console::{Console, Line, Step};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Roster console
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Roster - group profiles and directive-driven matching", long_about = None)]
#[command(version)]
struct Cli {
    /// Script to replay instead of reading standard input
    script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "ROSTER_CONFIG")]
    config: Option<String>,

    /// Group id the console posts to
    #[arg(short, long, env = "ROSTER_GROUP", allow_hyphen_values = true)]
    group: Option<i64>,

    /// Username the bot answers to
    #[arg(long, env = "ROSTER_BOT_USERNAME")]
    bot_username: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Log level
    #[arg(long, env = "ROSTER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "ROSTER_LOG_JSON")]
    json: bool,
}

impl Cli {
    /// Flags win over the configuration file and environment.
    fn apply_overrides(&self, config: &mut RosterConfig) {
        if let Some(group) = self.group {
            config.chat.group_id = group;
        }
        if let Some(bot_username) = &self.bot_username {
            config.chat.bot_username = bot_username.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.json {
            config.logging.json = true;
        }
    }
}

/// Logs go to stderr so replies on stdout stay clean.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let mut config = RosterConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    if config.chat.bot_username.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "bot username must not be empty".to_string(),
        ));
    }

    init_tracing(&config.logging);

    let store = Arc::new(InMemoryProfileStore::new());
    let service = CommandService::new(store, config.chat.service_config());
    let mut console = Console::new(service, GroupId(config.chat.group_id));
    info!(
        group = config.chat.group_id,
        bot = %config.chat.bot_username,
        "console ready"
    );

    match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            console.run(BufReader::new(file), cli.output).await
        }
        None => console.run(BufReader::new(tokio::io::stdin()), cli.output).await,
    }
}
