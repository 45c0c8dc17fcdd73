//! Closed intervals with independently optional bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A closed interval `[min, max]`. An absent bound is unbounded on that side.
///
/// When both bounds are present `min <= max` holds after every constructor
/// and setter; operations that would break it return [`RangeError`] and leave
/// the range untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RangeRepr<T>",
    bound(
        serialize = "T: Serialize + Copy",
        deserialize = "T: Deserialize<'de> + PartialOrd + fmt::Display + Copy"
    )
)]
pub struct Range<T> {
    min: Option<T>,
    max: Option<T>,
}

#[derive(Deserialize)]
struct RangeRepr<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: PartialOrd + fmt::Display + Copy> TryFrom<RangeRepr<T>> for Range<T> {
    type Error = RangeError;

    fn try_from(repr: RangeRepr<T>) -> Result<Self, Self::Error> {
        Range::new(repr.min, repr.max)
    }
}

impl<T: Copy> Range<T> {
    /// A range with no bounds; contains everything.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// `[value, value]`.
    pub const fn point(value: T) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn min(&self) -> Option<T> {
        self.min
    }

    pub fn max(&self) -> Option<T> {
        self.max
    }

    /// Apply `f` to both bounds. Callers must use a monotonic `f`.
    pub fn map<U: Copy>(self, f: impl Fn(T) -> U) -> Range<U> {
        Range {
            min: self.min.map(&f),
            max: self.max.map(&f),
        }
    }
}

impl<T: PartialOrd + fmt::Display + Copy> Range<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Result<Self, RangeError> {
        validate(min, max)?;
        Ok(Self { min, max })
    }

    /// `[min, max]` with both bounds present.
    pub fn closed(min: T, max: T) -> Result<Self, RangeError> {
        Self::new(Some(min), Some(max))
    }

    pub fn set_min(&mut self, min: Option<T>) -> Result<(), RangeError> {
        validate(min, self.max)?;
        self.min = min;
        Ok(())
    }

    pub fn set_max(&mut self, max: Option<T>) -> Result<(), RangeError> {
        validate(self.min, max)?;
        self.max = max;
        Ok(())
    }

    /// Replace both bounds at once, so a range can move past its old bounds.
    pub fn set_bounds(&mut self, min: Option<T>, max: Option<T>) -> Result<(), RangeError> {
        validate(min, max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }

    pub fn is_point(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min == max)
    }
}

impl<T: Copy> Default for Range<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

fn validate<T: PartialOrd + fmt::Display>(min: Option<T>, max: Option<T>) -> Result<(), RangeError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(RangeError {
            min: min.to_string(),
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Renders in directive syntax: `29`, `18,29`, `,10`, `18,`.
impl<T: PartialOrd + fmt::Display + Copy> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            if let Some(value) = self.min {
                return write!(f, "{value}");
            }
        }
        if let Some(min) = self.min {
            write!(f, "{min}")?;
        }
        f.write_str(",")?;
        if let Some(max) = self.max {
            write!(f, "{max}")?;
        }
        Ok(())
    }
}
