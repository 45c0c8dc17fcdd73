//! The command service.

use std::sync::Arc;

use roster_matching::{build_filter_reporting, FilterError, ProfileEditor};
use roster_store::ProfileStore;
use roster_types::{Location, Member};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::help;
use crate::message::{Chat, Inbound, OutboundMessage, Update};
use crate::render::{self, LOCATION_LABEL};

/// Turns updates into replies, reading and writing profiles through `S`.
pub struct CommandService<S: ProfileStore> {
    store: Arc<S>,
    config: ServiceConfig,
}

impl<S: ProfileStore> Clone for CommandService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: ProfileStore> CommandService<S> {
    pub fn new(store: Arc<S>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Handle one update. An empty reply means the update was not addressed
    /// to the bot.
    pub async fn handle(&self, update: &Update) -> ServiceResult<Vec<OutboundMessage>> {
        match &update.content {
            Inbound::Text(text) => {
                let Some(command) = Command::parse(text, &self.config.bot_username) else {
                    return Ok(Vec::new());
                };
                if command.requires_group() && !update.chat.is_group() {
                    debug!(command = command.name(), chat = %update.chat.id, "group command outside a group");
                    return Ok(Vec::new());
                }
                info!(
                    command = command.name(),
                    chat = %update.chat.id,
                    member = %update.sender.id,
                    "handling command"
                );
                self.dispatch(&update.chat, &update.sender, command).await
            }
            Inbound::Location(location) if update.chat.is_group() => {
                self.share_location(&update.chat, &update.sender, *location).await
            }
            Inbound::Location(_) => Ok(Vec::new()),
        }
    }

    async fn dispatch(
        &self,
        chat: &Chat,
        sender: &Member,
        command: Command,
    ) -> ServiceResult<Vec<OutboundMessage>> {
        match command {
            Command::Start => Ok(vec![OutboundMessage::Markdown(help::introduction())]),
            Command::Help => Ok(help::guide(&self.config.bot_username)
                .into_iter()
                .map(OutboundMessage::Markdown)
                .collect()),
            Command::Iam(args) => self.iam(chat, sender, &args).await,
            Command::Howis(args) => self.howis(chat, &args).await,
            Command::Whois(args) => self.whois(chat, sender, &args).await,
        }
    }

    fn unknown(&self, token: &str) -> OutboundMessage {
        OutboundMessage::Text(format!("{token}{}", self.config.unknown_suffix))
    }

    async fn iam(
        &self,
        chat: &Chat,
        sender: &Member,
        args: &[String],
    ) -> ServiceResult<Vec<OutboundMessage>> {
        let mut profile = self.store.get_or_create(chat.id, sender).await?;
        let rejected = ProfileEditor::apply_tokens(&mut profile, args.iter().map(String::as_str));

        let mut replies = Vec::with_capacity(rejected.len() + 2);
        for rejection in &rejected {
            warn!(member = %sender.id, token = %rejection.token, reason = %rejection.reason, "edit rejected");
            replies.push(self.unknown(&rejection.token));
        }
        replies.extend(render::profile_messages(&profile));

        self.store.upsert_profile(chat.id, profile).await?;
        info!(
            chat = %chat.id,
            member = %sender.id,
            applied = args.len() - rejected.len(),
            rejected = rejected.len(),
            "profile updated"
        );
        Ok(replies)
    }

    async fn share_location(
        &self,
        chat: &Chat,
        sender: &Member,
        location: Location,
    ) -> ServiceResult<Vec<OutboundMessage>> {
        let mut profile = self.store.get_or_create(chat.id, sender).await?;
        ProfileEditor::apply_location(&mut profile, location);
        let replies = render::profile_messages(&profile);
        self.store.upsert_profile(chat.id, profile).await?;
        info!(chat = %chat.id, member = %sender.id, "location stored");
        Ok(replies)
    }

    async fn howis(&self, chat: &Chat, args: &[String]) -> ServiceResult<Vec<OutboundMessage>> {
        let usage = || {
            vec![OutboundMessage::Markdown(format!(
                "*/howis @{}*",
                render::escape_markdown(&self.config.bot_username)
            ))]
        };
        let [name] = args else {
            debug!(args = args.len(), "howis takes exactly one username");
            return Ok(usage());
        };
        let username = name.strip_prefix('@').unwrap_or(name);
        if username.is_empty() {
            debug!("howis without a username");
            return Ok(usage());
        }

        match self.store.find_by_username(chat.id, username).await? {
            Some(profile) => Ok(render::profile_messages(&profile)),
            None => {
                debug!(chat = %chat.id, username, "no such profile");
                Ok(vec![self.unknown(&format!("@{username}"))])
            }
        }
    }

    async fn whois(
        &self,
        chat: &Chat,
        sender: &Member,
        args: &[String],
    ) -> ServiceResult<Vec<OutboundMessage>> {
        let (filter, ignored) = build_filter_reporting(args.iter().map(String::as_str));
        let mut replies: Vec<_> = ignored
            .iter()
            .inspect(|token| warn!(member = %sender.id, token = %token, "filter token ignored"))
            .map(|token| self.unknown(token))
            .collect();

        let origin = self
            .store
            .get_profile(chat.id, sender.id)
            .await?
            .and_then(|profile| profile.location().copied());
        let profiles = self.store.list_profiles(chat.id).await?;

        match filter.select(&profiles, origin.as_ref()) {
            Ok(matches) => {
                info!(chat = %chat.id, candidates = profiles.len(), matches = matches.len(), "whois answered");
                replies.push(OutboundMessage::Text(render::profile_list(matches)));
            }
            Err(FilterError::OriginRequired) => {
                debug!(member = %sender.id, "distance filter without a stored location");
                replies.push(self.unknown(LOCATION_LABEL));
            }
        }
        Ok(replies)
    }
}
