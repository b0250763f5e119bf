//! Recovers a Shamir-shared secret f(0) from threshold-many points by
//! Lagrange interpolation in exact rational arithmetic.

pub mod config;
pub mod decode;
pub mod error;
pub mod interpolate;
pub mod point;
pub mod polynomial;
pub mod secret;
pub mod verify;

#[cfg(test)]
mod fixtures;

pub use decode::{decode_document, parse_radix, ShareSet};
pub use error::{DecodeError, PolynomialError, ReconstructError, Result};
pub use interpolate::{reconstruct, reconstruct_with_observer, Term, TermLog, TermObserver};
pub use point::Point;
pub use polynomial::UnivariatePoly;
pub use secret::{InconsistentResult, Secret};
pub use verify::{verify_points, Mismatch, Verification};
