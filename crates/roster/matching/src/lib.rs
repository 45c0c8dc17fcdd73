//! # roster-matching
//!
//! The two consumers of parsed directives:
//!
//! - [`ProfileEditor`] applies edit directives to the sender's own profile.
//!   Each directive succeeds or is rejected on its own; a rejection never
//!   leaves a partial mutation and never stops the rest of the list.
//! - [`MatchFilter`] folds filter directives into a predicate and evaluates it
//!   against candidate profiles. Attribute ranges, the distance range and the
//!   tag sets are all conjunctive.
//!
//! Distances use the haversine formula, see [`haversine_distance_km`].

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod editor;
pub mod error;
pub mod filter;
pub mod geo;

pub use editor::{apply_edit, ProfileEditor, RejectedToken};
pub use error::{EditResult, FilterError, FilterResult, RejectedDirective};
pub use filter::{build_filter, build_filter_reporting, MatchFilter};
pub use geo::{haversine_distance_km, EARTH_RADIUS_KM};
