//! # roster-types
//!
//! Shared data model for group rosters: the closed catalog of numeric
//! attributes, optionally-bounded ranges, locations, tags, markers and the
//! per-group member [`Profile`].
//!
//! ## Invariants
//!
//! - Every stored attribute value lies inside its [`AttributeKind`] bounds.
//! - A [`Range`] with both bounds present always has `min <= max`.
//! - A [`Marker`] is exactly one pictographic code point.
//! - [`Tag`] equality and ordering ignore ASCII case.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod error;
pub mod location;
pub mod marker;
pub mod member;
pub mod profile;
pub mod range;
pub mod tag;

pub use catalog::{AttributeKind, DISTANCE_UNIT};
pub use error::{AttributeError, MarkerError, RangeError};
pub use location::Location;
pub use marker::{Marker, DEFAULT_MARKER};
pub use member::{GroupId, Member, MemberId};
pub use profile::Profile;
pub use range::Range;
pub use tag::Tag;
