//! # roster-directive
//!
//! Turns single whitespace-delimited tokens into typed [`Directive`]s.
//!
//! ```text
//! range   ::= [integer][,][integer]unit        29yo  18,29yo  ,10km  18,yo
//! tag     ::= [+|-]#alphanumeric{any}          #nerd  +#jock  -#sporty
//! marker  ::= one pictographic symbol          🦊   (edit context only)
//! ```
//!
//! Rules are tried in that order and the first one matching the whole token
//! wins. A token that looks like a range but cannot be resolved (unknown unit,
//! inverted bounds, overflowing integer) is [`Directive::Unrecognized`]; it is
//! never retried as a tag or marker.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod directive;
mod parser;

pub use directive::{Directive, DirectiveContext};
pub use parser::{parse_all, parse_directive};
