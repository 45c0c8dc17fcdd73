//! # roster-service
//!
//! Transport-agnostic command handling. A transport turns whatever it
//! receives into an [`Update`], calls [`CommandService::handle`] and delivers
//! the returned [`OutboundMessage`]s.
//!
//! | command | where | effect |
//! |---|---|---|
//! | `/start` | anywhere | short introduction |
//! | `/help` | anywhere | grammar guide |
//! | `/iam {argument}` | groups | edit the sender's profile |
//! | location message | groups | store the sender's location |
//! | `/howis @username` | groups | show one profile |
//! | `/whois {filter}` | groups | list matching profiles |

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod message;
pub mod render;
pub mod service;

pub use command::Command;
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use message::{Chat, ChatKind, Inbound, OutboundMessage, Update};
pub use service::CommandService;
