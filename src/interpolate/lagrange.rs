use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::Result;
use crate::interpolate::observer::{Term, TermObserver};
use crate::point::{select_first, Point};
use crate::secret::Secret;

/*
    L_i(0) = Π_{j != i} (0 - x_j) / (x_i - x_j)

    e.g. xs = [1, 2, 3], i = 0
    L_0(0) = (0 - 2)(0 - 3)
             --------------  = 6 / 2 = 3
             (1 - 2)(1 - 3)

    Numerator and denominator are accumulated as integers and divided once at the end,
    so nothing is rounded. Only reached through select_first, which guarantees i is in range
    and the x-values are distinct, so the denominator is never zero.
*/
pub(crate) fn basis_at_zero(xs: &[u64], i: usize) -> BigRational {
    let x_i = BigInt::from(xs[i]);
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();

    for (j, &x_j) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        let x_j = BigInt::from(x_j);
        numerator *= -&x_j;
        denominator *= &x_i - &x_j;
    }

    BigRational::new(numerator, denominator)
}

/// Recovers f(0) from the first `k` points.
pub fn reconstruct(points: &[Point], k: usize) -> Result<Secret> {
    reconstruct_with_observer(points, k, &mut ())
}

/// Same as [`reconstruct`], reporting every term to `observer` as it is computed.
pub fn reconstruct_with_observer<O: TermObserver + ?Sized>(
    points: &[Point],
    k: usize,
    observer: &mut O,
) -> Result<Secret> {
    let selected = select_first(points, k)?;
    let xs: Vec<u64> = selected.iter().map(|point| point.x).collect();

    let mut sum = BigRational::zero();
    for (i, point) in selected.iter().enumerate() {
        let basis = basis_at_zero(&xs, i);
        let contribution = &basis * BigRational::from_integer(point.y.clone());
        sum += &contribution;

        observer.on_term(&Term {
            position: i + 1,
            x: point.x,
            y: point.y.clone(),
            basis,
            contribution,
        });
    }

    Ok(Secret::from_exact(sum))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ReconstructError;
    use crate::interpolate::observer::TermLog;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn quadratic_points() -> Vec<Point> {
        // f(x) = x^2 + x + 1
        vec![Point::new(1, 3), Point::new(2, 7), Point::new(3, 13)]
    }

    #[test]
    fn test_basis_values() {
        let xs = [1, 2, 3];
        assert_eq!(basis_at_zero(&xs, 0), ratio(3, 1));
        assert_eq!(basis_at_zero(&xs, 1), ratio(-3, 1));
        assert_eq!(basis_at_zero(&xs, 2), ratio(1, 1));
    }

    #[test]
    fn test_basis_values_sum_to_one() {
        let xs = [2, 5, 9, 14];
        let total: BigRational = (0..xs.len()).map(|i| basis_at_zero(&xs, i)).sum();
        assert_eq!(total, BigRational::one());
    }

    #[test]
    fn test_basis_single_point() {
        assert_eq!(basis_at_zero(&[7], 0), BigRational::one());
    }

    #[test]
    fn test_reconstruct_quadratic() {
        let secret = reconstruct(&quadratic_points(), 3).unwrap();
        assert_eq!(secret.value(), &BigInt::from(1));
        assert!(secret.is_integer());
    }

    #[test]
    fn test_reconstruct_constant() {
        let points = vec![Point::new(1, 5), Point::new(2, 5)];
        let secret = reconstruct(&points, 2).unwrap();
        assert_eq!(secret.value(), &BigInt::from(5));
    }

    #[test]
    fn test_threshold_one_returns_first_y() {
        let secret = reconstruct(&quadratic_points(), 1).unwrap();
        assert_eq!(secret.value(), &BigInt::from(3));
    }

    #[test]
    fn test_extra_points_are_ignored() {
        // the fourth point is off the polynomial but never selected
        let mut points = quadratic_points();
        points.push(Point::new(4, 1000));
        assert_eq!(reconstruct(&points, 3).unwrap().value(), &BigInt::from(1));
    }

    #[test]
    fn test_inconsistent_points_are_flagged() {
        // line through (1, 1) and (3, 2) crosses x = 0 at 1/2
        let points = vec![Point::new(1, 1), Point::new(3, 2)];
        let secret = reconstruct(&points, 2).unwrap();
        assert_eq!(secret.exact(), &ratio(1, 2));
        assert_eq!(secret.value(), &BigInt::from(1));
        assert!(secret.warning().is_some());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            reconstruct(&quadratic_points(), 0),
            Err(ReconstructError::InvalidThreshold { k: 0 })
        );
        assert_eq!(
            reconstruct(&quadratic_points(), 5),
            Err(ReconstructError::InsufficientPoints { needed: 5, available: 3 })
        );
        let duplicated = vec![Point::new(2, 7), Point::new(2, 7)];
        assert_eq!(
            reconstruct(&duplicated, 2),
            Err(ReconstructError::DegenerateInput { x: 2 })
        );
    }

    #[test]
    fn test_repeated_x_is_an_error_not_a_panic() {
        // repeats that are not next to each other, plus one past the selection
        let points = vec![
            Point::new(4, 1),
            Point::new(9, 2),
            Point::new(4, 3),
            Point::new(9, 4),
        ];
        assert_eq!(
            reconstruct(&points, 3),
            Err(ReconstructError::DegenerateInput { x: 4 })
        );
        assert!(reconstruct(&points, 2).is_ok());
    }

    #[test]
    fn test_observer_sees_terms_in_order() {
        let mut log = TermLog::default();
        let secret = reconstruct_with_observer(&quadratic_points(), 3, &mut log).unwrap();

        let positions: Vec<usize> = log.terms.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(log.terms[0].basis, ratio(3, 1));
        assert_eq!(log.terms[1].contribution, ratio(-21, 1));
        assert_eq!(log.terms[2].contribution, ratio(13, 1));

        let total: BigRational = log.terms.iter().map(|t| t.contribution.clone()).sum();
        assert_eq!(&total, secret.exact());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        let mut record = |term: &Term| seen.push(term.x);
        reconstruct_with_observer(&quadratic_points(), 2, &mut record).unwrap();
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_observer_not_called_on_error() {
        let mut calls = 0;
        let mut count = |_: &Term| calls += 1;
        assert!(reconstruct_with_observer(&quadratic_points(), 4, &mut count).is_err());
        assert_eq!(calls, 0);
    }
}
