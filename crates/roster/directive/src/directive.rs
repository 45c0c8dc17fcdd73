use std::fmt;

use roster_types::{AttributeKind, Marker, Range, Tag, DISTANCE_UNIT};
use serde::{Deserialize, Serialize};

/// Where a token is being consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveContext {
    /// Editing the sender's own profile (`/iam`)
    Edit,
    /// Searching other profiles (`/whois`)
    Filter,
}

/// One parsed unit of intent derived from one token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Add the tag (edit) or require it (filter)
    TagInclude { tag: Tag },
    /// Remove the tag (edit) or forbid it (filter)
    TagExclude { tag: Tag },
    /// Store an attribute value; edit only
    AttributeSet { kind: AttributeKind, value: i32 },
    /// Require an attribute value inside a range; filter only
    AttributeRange { kind: AttributeKind, range: Range<i32> },
    /// Require a distance from the origin, in kilometers; filter only
    DistanceRange { range: Range<f64> },
    /// Replace the profile marker; edit only
    MarkerSet { marker: Marker },
    /// Matched no rule; carries the original token
    Unrecognized { token: String },
}

impl Directive {
    pub fn unrecognized(token: impl Into<String>) -> Self {
        Directive::Unrecognized {
            token: token.into(),
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Directive::Unrecognized { .. })
    }

    /// Whether the directive can be applied to a profile.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Directive::TagInclude { .. }
                | Directive::TagExclude { .. }
                | Directive::AttributeSet { .. }
                | Directive::MarkerSet { .. }
        )
    }

    /// Whether the directive contributes to a match filter.
    pub fn is_filter(&self) -> bool {
        matches!(
            self,
            Directive::TagInclude { .. }
                | Directive::TagExclude { .. }
                | Directive::AttributeRange { .. }
                | Directive::DistanceRange { .. }
        )
    }
}

/// Renders the directive back in token syntax.
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::TagInclude { tag } => write!(f, "{tag}"),
            Directive::TagExclude { tag } => write!(f, "-{tag}"),
            Directive::AttributeSet { kind, value } => write!(f, "{value}{}", kind.unit()),
            Directive::AttributeRange { kind, range } => write!(f, "{range}{}", kind.unit()),
            Directive::DistanceRange { range } => write!(f, "{range}{DISTANCE_UNIT}"),
            Directive::MarkerSet { marker } => write!(f, "{marker}"),
            Directive::Unrecognized { token } => f.write_str(token),
        }
    }
}
