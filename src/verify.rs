use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::Result;
use crate::interpolate::reconstruct;
use crate::point::{select_first, Point};
use crate::polynomial::UnivariatePoly;
use crate::secret::Secret;

/// A point past the first `k` that is not on the interpolated polynomial.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mismatch {
    pub x: u64,
    pub expected: BigRational,
    pub actual: BigInt,
}

#[derive(Debug, Clone)]
pub struct Verification {
    pub secret: Secret,
    pub polynomial: UnivariatePoly,
    pub mismatches: Vec<Mismatch>,
}

impl Verification {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty() && self.secret.is_integer()
    }
}

/*
    Builds the whole degree k-1 polynomial from the first k points and checks every
    remaining point against it. Reconstruction itself still only uses the first k.
*/
pub fn verify_points(points: &[Point], k: usize) -> Result<Verification> {
    let selected = select_first(points, k)?;
    let secret = reconstruct(points, k)?;

    let xs: Vec<BigRational> = selected.iter().map(|p| to_rational(&BigInt::from(p.x))).collect();
    let ys: Vec<BigRational> = selected.iter().map(|p| to_rational(&p.y)).collect();
    // select_first already rejected repeated x-values
    let polynomial = UnivariatePoly::interpolate_unchecked(&xs, &ys);

    let mismatches = points[k..]
        .iter()
        .filter_map(|point| {
            let expected = polynomial.evaluate(&to_rational(&BigInt::from(point.x)));
            if expected == to_rational(&point.y) {
                None
            } else {
                Some(Mismatch {
                    x: point.x,
                    expected,
                    actual: point.y.clone(),
                })
            }
        })
        .collect();

    Ok(Verification {
        secret,
        polynomial,
        mismatches,
    })
}

fn to_rational(value: &BigInt) -> BigRational {
    BigRational::from_integer(value.clone())
}
