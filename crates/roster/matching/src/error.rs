use roster_types::AttributeError;
use thiserror::Error;

/// Why an edit directive was not applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectedDirective {
    #[error("unrecognized argument: {token}")]
    Unrecognized { token: String },

    #[error(transparent)]
    OutOfRange(#[from] AttributeError),

    #[error("'{directive}' can only be used to search profiles")]
    FilterOnly { directive: String },
}

/// Errors from evaluating a match filter over a profile set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("a distance filter needs an origin location")]
    OriginRequired,
}

pub type EditResult<T> = Result<T, RejectedDirective>;

pub type FilterResult<T> = Result<T, FilterError>;
