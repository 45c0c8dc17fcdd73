//! A terminal stand-in for a group chat.
//!
//! Each input line is one update posted by a named member:
//!
//! ```text
//! @ada /iam 36yo #math 🦊
//! @bob /loc 45.46 9.19 25
//! dm @ada /help
//! /dump
//! ```
//!
//! Members get ids in order of first appearance. Lines starting with `#` are
//! comments.

use std::collections::HashMap;

use roster_service::{Chat, CommandService, OutboundMessage, ServiceError, Update};
use roster_store::ProfileStore;
use roster_types::{GroupId, Location, Member, MemberId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Say {
        username: String,
        text: String,
        private: bool,
    },
    Share {
        username: String,
        location: Location,
    },
    Dump,
    Quit,
    Blank,
}

impl Line {
    pub fn parse(input: &str) -> CliResult<Self> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return Ok(Line::Blank);
        }
        match input.to_ascii_lowercase().as_str() {
            "/quit" | "/exit" => return Ok(Line::Quit),
            "/dump" => return Ok(Line::Dump),
            _ => {}
        }

        let (private, rest) = match input.strip_prefix("dm ") {
            Some(rest) => (true, rest.trim_start()),
            None => (false, input),
        };
        let Some(addressed) = rest.strip_prefix('@') else {
            return Err(CliError::InvalidArgument(format!(
                "expected `@username message`, got `{input}`"
            )));
        };
        let (username, text) = addressed
            .split_once(char::is_whitespace)
            .map(|(username, text)| (username, text.trim()))
            .unwrap_or((addressed, ""));
        if username.is_empty() {
            return Err(CliError::InvalidArgument("missing username".to_string()));
        }

        if let Some(coordinates) = text.strip_prefix("/loc") {
            if private {
                return Err(CliError::InvalidArgument(
                    "locations can only be shared in the group".to_string(),
                ));
            }
            return Ok(Line::Share {
                username: username.to_string(),
                location: parse_location(coordinates)?,
            });
        }

        Ok(Line::Say {
            username: username.to_string(),
            text: text.to_string(),
            private,
        })
    }
}

fn parse_location(coordinates: &str) -> CliResult<Location> {
    let invalid = || {
        CliError::InvalidArgument(format!(
            "expected `/loc latitude longitude [accuracy]`, got `{}`",
            coordinates.trim()
        ))
    };
    let parts: Vec<&str> = coordinates.split_whitespace().collect();
    let (latitude, longitude, accuracy) = match parts.as_slice() {
        [latitude, longitude] => (latitude, longitude, None),
        [latitude, longitude, accuracy] => (latitude, longitude, Some(accuracy)),
        _ => return Err(invalid()),
    };
    let latitude: f64 = latitude.parse().map_err(|_| invalid())?;
    let longitude: f64 = longitude.parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid());
    }
    let location = Location::new(latitude, longitude);
    match accuracy {
        None => Ok(location),
        Some(meters) => {
            let meters: f64 = meters.parse().map_err(|_| invalid())?;
            if !meters.is_finite() || meters < 0.0 {
                return Err(invalid());
            }
            Ok(location.with_accuracy(meters))
        }
    }
}

/// What a line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Replies(Vec<OutboundMessage>),
    Dump(String),
    Quit,
    Nothing,
}

pub struct Console<S: ProfileStore> {
    service: CommandService<S>,
    group: GroupId,
    members: HashMap<String, Member>,
}

impl<S: ProfileStore> Console<S> {
    pub fn new(service: CommandService<S>, group: GroupId) -> Self {
        Self {
            service,
            group,
            members: HashMap::new(),
        }
    }

    /// The member behind `username`, registered on first use.
    fn member(&mut self, username: &str) -> Member {
        let next_id = self.members.len() as i64 + 1;
        self.members
            .entry(username.to_lowercase())
            .or_insert_with(|| {
                debug!(username, id = next_id, "new console member");
                Member::new(MemberId(next_id), username).with_username(username)
            })
            .clone()
    }

    pub async fn step(&mut self, input: &str) -> CliResult<Step> {
        let update = match Line::parse(input)? {
            Line::Blank => return Ok(Step::Nothing),
            Line::Quit => return Ok(Step::Quit),
            Line::Dump => {
                let profiles = self
                    .service
                    .store()
                    .list_profiles(self.group)
                    .await
                    .map_err(ServiceError::from)?;
                return Ok(Step::Dump(serde_json::to_string_pretty(&profiles)?));
            }
            Line::Say {
                username,
                text,
                private,
            } => {
                let sender = self.member(&username);
                let chat = if private {
                    Chat::private(sender.id.0)
                } else {
                    Chat::group(self.group.0)
                };
                Update::text(chat, sender, text)
            }
            Line::Share { username, location } => {
                let sender = self.member(&username);
                Update::location(Chat::group(self.group.0), sender, location)
            }
        };
        Ok(Step::Replies(self.service.handle(&update).await?))
    }

    /// Feed every line of `reader` through the service, printing replies.
    ///
    /// Malformed lines are reported and skipped.
    pub async fn run<R>(&mut self, reader: R, format: OutputFormat) -> CliResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            match self.step(&line).await {
                Ok(Step::Quit) => break,
                Ok(step) => output::print_step(&step, format)?,
                Err(CliError::InvalidArgument(reason)) => {
                    warn!(%reason, "skipping line");
                    output::print_problem(&reason);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_service::ServiceConfig;
    use roster_store::InMemoryProfileStore;
    use std::sync::Arc;

    fn console() -> Console<InMemoryProfileStore> {
        let service = CommandService::new(Arc::new(InMemoryProfileStore::new()), ServiceConfig::default());
        Console::new(service, GroupId(-1))
    }

    #[test]
    fn parses_lines() {
        assert_eq!(
            Line::parse("@ada /iam 29yo  #nerd").unwrap(),
            Line::Say {
                username: "ada".into(),
                text: "/iam 29yo  #nerd".into(),
                private: false
            }
        );
        assert_eq!(
            Line::parse("dm @ada /help").unwrap(),
            Line::Say {
                username: "ada".into(),
                text: "/help".into(),
                private: true
            }
        );
        assert_eq!(
            Line::parse("@bob /loc 45.5 -9.25").unwrap(),
            Line::Share {
                username: "bob".into(),
                location: Location::new(45.5, -9.25)
            }
        );
        assert_eq!(Line::parse("  ").unwrap(), Line::Blank);
        assert_eq!(Line::parse("# setup").unwrap(), Line::Blank);
        assert_eq!(Line::parse("/DUMP").unwrap(), Line::Dump);
        assert_eq!(Line::parse("/quit").unwrap(), Line::Quit);
    }

    #[test]
    fn rejects_malformed_lines() {
        for input in [
            "/iam 29yo",
            "@",
            "@bob /loc 45",
            "@bob /loc 95 9",
            "@bob /loc a b",
            "@bob /loc 1 2 -5",
            "@bob /loc 1 2 far",
            "@bob /loc 1 2 3 4",
            "dm @bob /loc 1 2",
        ] {
            assert!(
                matches!(Line::parse(input), Err(CliError::InvalidArgument(_))),
                "{input} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn shared_accuracy_reaches_the_reply() {
        let expected = Location::new(45.0, 9.0).with_accuracy(25.0);
        assert_eq!(
            Line::parse("@bob /loc 45.0 9.0 25").unwrap(),
            Line::Share {
                username: "bob".into(),
                location: expected
            }
        );

        let mut console = console();
        let Step::Replies(replies) = console.step("@bob /loc 45.0 9.0 25").await.unwrap() else {
            panic!("expected replies");
        };
        assert_eq!(replies.last(), Some(&OutboundMessage::Location(expected)));
    }

    #[tokio::test]
    async fn members_keep_their_ids() {
        let mut console = console();
        assert_eq!(console.member("ada").id, MemberId(1));
        assert_eq!(console.member("bob").id, MemberId(2));
        assert_eq!(console.member("ADA").id, MemberId(1));
    }

    #[tokio::test]
    async fn session_round_trip() {
        let mut console = console();
        console.step("@ada /iam 29yo #nerd").await.unwrap();
        console.step("@bob /iam 41yo #nerd").await.unwrap();

        let Step::Replies(replies) = console.step("@bob /whois 18,30yo #nerd").await.unwrap() else {
            panic!("expected replies");
        };
        assert_eq!(replies, vec![OutboundMessage::Text("👤 × 1\n😀 @ada".into())]);

        let Step::Dump(json) = console.step("/dump").await.unwrap() else {
            panic!("expected a dump");
        };
        let dumped: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(dumped.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn script_stops_at_quit() {
        let mut console = console();
        let script = b"@ada /iam 29yo\nnot a line\n/quit\n@bob /iam 30yo\n";
        console.run(&script[..], OutputFormat::Json).await.unwrap();
        assert_eq!(console.members.len(), 1);
    }
}
