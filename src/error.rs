use num_rational::BigRational;
use thiserror::Error;

/// Fatal conditions raised by the interpolator. No secret is produced when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    #[error("threshold must be at least 1, got {k}")]
    InvalidThreshold { k: usize },

    #[error("not enough points to reconstruct the secret (need {needed}, got {available})")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("duplicate x-coordinate {x} among the selected points")]
    DegenerateInput { x: u64 },
}

/// Rejected input to `UnivariatePoly::interpolate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("got {xs} x-values but {ys} y-values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("x-value {x} appears more than once")]
    RepeatedX { x: BigRational },
}

/// Errors from turning a share document into typed points.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share document repeats the key `{key}`")]
    DuplicateShare { key: String },

    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` is not a valid {expected}: {source}")]
    InvalidField {
        field: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("share key `{key}` is not a non-negative integer")]
    InvalidShareIndex { key: String },

    #[error("share {x}: base `{base}` is not a radix in 2..=36")]
    InvalidRadix { x: u64, base: String },

    #[error("share {x}: value `{value}` is not a valid base-{radix} number")]
    InvalidDigits { x: u64, value: String, radix: u32 },
}

pub type Result<T> = std::result::Result<T, ReconstructError>;
