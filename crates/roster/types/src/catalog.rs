//! Unit catalog: the closed set of numeric attributes a profile can carry.
//!
//! New kinds are added here and nowhere else. Unit labels must be word
//! characters only and must not collide with [`DISTANCE_UNIT`], which the
//! directive grammar reserves for distance filters.

use serde::{Deserialize, Serialize};

/// Unit label reserved for distance filters, in kilometers.
pub const DISTANCE_UNIT: &str = "km";

/// A numeric trait of a member, with its unit label and valid bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Age in years
    Age,
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
}

impl AttributeKind {
    /// Every kind, in display order.
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Age,
        AttributeKind::Height,
        AttributeKind::Weight,
    ];

    /// Unit label used in directives (`29yo`, `175cm`, `70kg`).
    pub const fn unit(self) -> &'static str {
        match self {
            AttributeKind::Age => "yo",
            AttributeKind::Height => "cm",
            AttributeKind::Weight => "kg",
        }
    }

    /// Smallest accepted value (inclusive).
    pub const fn lower_bound(self) -> i32 {
        match self {
            AttributeKind::Age => 14,
            AttributeKind::Height => 50,
            AttributeKind::Weight => 25,
        }
    }

    /// Largest accepted value (inclusive).
    pub const fn upper_bound(self) -> i32 {
        match self {
            AttributeKind::Age => 150,
            AttributeKind::Height => 250,
            AttributeKind::Weight => 750,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Age => "age",
            AttributeKind::Height => "height",
            AttributeKind::Weight => "weight",
        }
    }

    /// Find the kind whose unit label is exactly `unit`.
    pub fn lookup(unit: &str) -> Option<AttributeKind> {
        Self::ALL.into_iter().find(|kind| kind.unit() == unit)
    }

    /// Whether `value` may be stored for this kind.
    pub fn validate(self, value: i32) -> bool {
        (self.lower_bound()..=self.upper_bound()).contains(&value)
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
