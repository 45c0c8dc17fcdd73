use thiserror::Error;

use crate::catalog::AttributeKind;

/// Raised when a [`Range`](crate::Range) would end up with `min > max`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid range: min ({min}) > max ({max})")]
pub struct RangeError {
    pub min: String,
    pub max: String,
}

/// Raised when a string is not usable as a profile marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("marker must be a single symbol, got {0:?}")]
    NotASymbol(String),
}

/// Raised when an attribute value falls outside its catalog bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value}{unit} is outside the accepted {kind} range [{min}, {max}]", unit = .kind.unit(), min = .kind.lower_bound(), max = .kind.upper_bound())]
pub struct AttributeError {
    pub kind: AttributeKind,
    pub value: i32,
}
