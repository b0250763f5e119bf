use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// The reconstructed value f(0).
///
/// `exact` is kept in lowest terms. `rounded` is the nearest integer, with
/// halves rounded away from zero. Shares taken from an integer polynomial
/// always give `exact == rounded`; anything else means the points disagree.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Secret {
    exact: BigRational,
    rounded: BigInt,
}

/// Non-fatal: the interpolated value is not a whole number.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InconsistentResult {
    pub exact: BigRational,
    pub rounded: BigInt,
}

impl fmt::Display for InconsistentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interpolated value {} is not an integer, rounded to {}; the points do not lie on one integer polynomial",
            self.exact, self.rounded
        )
    }
}

impl Secret {
    pub fn from_exact(exact: BigRational) -> Self {
        let rounded = exact.round().to_integer();
        Secret { exact, rounded }
    }

    pub fn exact(&self) -> &BigRational {
        &self.exact
    }

    pub fn value(&self) -> &BigInt {
        &self.rounded
    }

    pub fn into_value(self) -> BigInt {
        self.rounded
    }

    pub fn is_integer(&self) -> bool {
        self.exact.denom().is_one()
    }

    pub fn warning(&self) -> Option<InconsistentResult> {
        if self.is_integer() {
            return None;
        }
        Some(InconsistentResult {
            exact: self.exact.clone(),
            rounded: self.rounded.clone(),
        })
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded)
    }
}

/*
    Renders a rational as a decimal with `digits` fractional digits, e.g. 7/3 with 4 digits => "2.3333".
    The value is scaled by 10^digits, rounded to an integer, then split back into whole and fractional parts.
    Only used for human-readable output, the arithmetic itself never leaves BigRational.
*/
pub fn format_decimal(value: &BigRational, digits: usize) -> String {
    let scale = BigInt::from(10u32).pow(digits as u32);
    let scaled = (value * BigRational::from_integer(scale.clone()))
        .round()
        .to_integer();

    let sign = if scaled.is_negative() { "-" } else { "" };
    let (whole, fraction) = scaled.abs().div_rem(&scale);

    if digits == 0 {
        return format!("{sign}{whole}");
    }
    format!("{sign}{whole}.{:0>width$}", fraction.to_string(), width = digits)
}
