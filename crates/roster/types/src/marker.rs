use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MarkerError;

/// The marker a new profile starts with.
pub const DEFAULT_MARKER: Marker = Marker('😀');

// Exactly one code point from the symbol categories. Marks, format and
// control code points do not qualify.
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{S}$").expect("symbol pattern is a valid regex")
});

/// A single pictographic symbol decorating a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(char);

impl Marker {
    pub fn parse(input: &str) -> Result<Self, MarkerError> {
        if !SYMBOL.is_match(input) {
            return Err(MarkerError::NotASymbol(input.to_string()));
        }
        input
            .chars()
            .next()
            .map(Marker)
            .ok_or_else(|| MarkerError::NotASymbol(input.to_string()))
    }
}

impl Default for Marker {
    fn default() -> Self {
        DEFAULT_MARKER
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Marker {
    type Error = MarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Marker::parse(&value)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0.to_string()
    }
}
