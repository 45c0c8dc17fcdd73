//! What transports hand in and get back.

use roster_types::{GroupId, Location, Member};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Group,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: GroupId,
    pub kind: ChatKind,
}

impl Chat {
    pub fn group(id: i64) -> Self {
        Self {
            id: GroupId(id),
            kind: ChatKind::Group,
        }
    }

    pub fn private(id: i64) -> Self {
        Self {
            id: GroupId(id),
            kind: ChatKind::Private,
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == ChatKind::Group
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum Inbound {
    Text(String),
    Location(Location),
}

/// One inbound event from a chat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub chat: Chat,
    pub sender: Member,
    pub content: Inbound,
}

impl Update {
    pub fn text(chat: Chat, sender: Member, text: impl Into<String>) -> Self {
        Self {
            chat,
            sender,
            content: Inbound::Text(text.into()),
        }
    }

    pub fn location(chat: Chat, sender: Member, location: Location) -> Self {
        Self {
            chat,
            sender,
            content: Inbound::Location(location),
        }
    }
}

/// A message the transport should deliver to the chat the update came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Plain text
    Text(String),
    /// Text using `*bold*`, `_italic_` and `` `code` `` markup
    Markdown(String),
    /// A map pin
    Location(Location),
}

impl OutboundMessage {
    pub fn body(&self) -> Option<&str> {
        match self {
            OutboundMessage::Text(body) | OutboundMessage::Markdown(body) => Some(body),
            OutboundMessage::Location(_) => None,
        }
    }
}
