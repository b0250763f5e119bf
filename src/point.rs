use std::collections::HashSet;

use num_bigint::BigInt;

use crate::error::{ReconstructError, Result};

/// One share: `x` identifies the share, `y` is the decoded value f(x).
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Point {
    pub x: u64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }
}

impl From<(u64, BigInt)> for Point {
    fn from((x, y): (u64, BigInt)) -> Self {
        Point { x, y }
    }
}

/*
    Selection policy: the first k points in input order are used, the rest are ignored.
    Checks run in a fixed order so the caller always sees the same error for the same input:
    k >= 1, then enough points, then distinct x among the selected ones.
*/
pub fn select_first(points: &[Point], k: usize) -> Result<&[Point]> {
    if k < 1 {
        return Err(ReconstructError::InvalidThreshold { k });
    }

    if points.len() < k {
        return Err(ReconstructError::InsufficientPoints {
            needed: k,
            available: points.len(),
        });
    }

    let selected = &points[..k];
    let mut seen = HashSet::with_capacity(k);
    for point in selected {
        if !seen.insert(point.x) {
            return Err(ReconstructError::DegenerateInput { x: point.x });
        }
    }

    Ok(selected)
}
