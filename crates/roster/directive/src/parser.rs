//! Ordered token matchers.

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use roster_types::{AttributeKind, Marker, Range, RangeError, Tag, DISTANCE_UNIT};
use thiserror::Error;
use tracing::debug;

use crate::directive::{Directive, DirectiveContext};

// [min][,][max]unit, ASCII only. Capture positions follow leftmost-first
// greedy semantics, so `29` alone splits into min `2` and unit `9`.
static RANGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*)(,?)([0-9]*)([0-9A-Za-z_]+)$").expect("range pattern is a valid regex")
});

static TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)#([0-9A-Za-z]+).*$").expect("tag pattern is a valid regex")
});

const EXCLUDE_PREFIX: &str = "-";

/// Why a token shaped like a range could not be resolved.
#[derive(Debug, Error)]
enum RangeRejection {
    #[error("bound does not fit an integer: {0}")]
    Overflow(#[from] ParseIntError),

    #[error(transparent)]
    Inverted(#[from] RangeError),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Parse one token into exactly one directive.
///
/// Pure: the same token and context always give the same directive.
pub fn parse_directive(token: &str, context: DirectiveContext) -> Directive {
    if let Some(caps) = RANGE_TOKEN.captures(token) {
        return match resolve_range(&caps, context) {
            Ok(directive) => {
                debug!(token, ?context, %directive, "range token");
                directive
            }
            Err(reason) => {
                debug!(token, ?context, %reason, "range token rejected");
                Directive::unrecognized(token)
            }
        };
    }

    if let Some(caps) = TAG_TOKEN.captures(token) {
        // group 2 only matches ASCII alphanumerics
        if let Some(tag) = Tag::new(&caps[2]) {
            debug!(token, ?context, %tag, "tag token");
            return if &caps[1] == EXCLUDE_PREFIX {
                Directive::TagExclude { tag }
            } else {
                Directive::TagInclude { tag }
            };
        }
    }

    if context == DirectiveContext::Edit {
        if let Ok(marker) = Marker::parse(token) {
            debug!(token, "marker token");
            return Directive::MarkerSet { marker };
        }
    }

    debug!(token, ?context, "unrecognized token");
    Directive::unrecognized(token)
}

/// Parse every token in order.
pub fn parse_all<'a, I>(tokens: I, context: DirectiveContext) -> Vec<Directive>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| parse_directive(token, context))
        .collect()
}

fn resolve_range(caps: &Captures<'_>, context: DirectiveContext) -> Result<Directive, RangeRejection> {
    let min = parse_bound(&caps[1])?;
    let max = if caps[2].is_empty() {
        min
    } else {
        parse_bound(&caps[3])?
    };
    let range = Range::new(min, max)?;
    let unit = &caps[4];

    if unit == DISTANCE_UNIT {
        return Ok(Directive::DistanceRange {
            range: range.map(f64::from),
        });
    }

    let kind = AttributeKind::lookup(unit).ok_or_else(|| RangeRejection::UnknownUnit(unit.into()))?;
    match (context, range.min()) {
        (DirectiveContext::Edit, Some(value)) if range.is_point() => {
            Ok(Directive::AttributeSet { kind, value })
        }
        _ => Ok(Directive::AttributeRange { kind, range }),
    }
}

fn parse_bound(digits: &str) -> Result<Option<i32>, ParseIntError> {
    if digits.is_empty() {
        Ok(None)
    } else {
        digits.parse().map(Some)
    }
}
