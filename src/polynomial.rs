use std::collections::HashSet;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::PolynomialError;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnivariatePoly {
    // 1 coefficient for each power of x, lowest power first, no trailing zeros
    coefficient: Vec<BigRational>,
}

impl UnivariatePoly {
    pub fn new(mut coefficient: Vec<BigRational>) -> Self {
        while coefficient.last().is_some_and(|c| c.is_zero()) {
            coefficient.pop();
        }
        if coefficient.is_empty() {
            coefficient.push(BigRational::zero());
        }
        UnivariatePoly { coefficient }
    }

    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficient
    }

    pub fn from_integers<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        UnivariatePoly::new(
            coefficients
                .into_iter()
                .map(|c| BigRational::from_integer(c.into()))
                .collect(),
        )
    }

    pub fn degree(&self) -> usize {
        self.coefficient.len() - 1
    }

    pub fn constant_term(&self) -> &BigRational {
        &self.coefficient[0]
    }

    /*
        Horner's rule: 5x^4 + 3x^2 + 7x + 11 is stored as [11, 7, 3, 0, 5]
        and evaluated from the highest power down as (((5x + 0)x + 3)x + 7)x + 11
    */
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        self.coefficient
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, curr| acc * x + curr)
    }

    /*
        Sum of y_i * L_i(x) over all points, where
        L_i(x) = Π_{j != i} (x - x_j) / (x_i - x_j)
    */
    pub fn interpolate(xs: &[BigRational], ys: &[BigRational]) -> Result<Self, PolynomialError> {
        if xs.len() != ys.len() {
            return Err(PolynomialError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let mut seen = HashSet::with_capacity(xs.len());
        for x in xs {
            if !seen.insert(x) {
                return Err(PolynomialError::RepeatedX { x: x.clone() });
            }
        }
        Ok(Self::interpolate_unchecked(xs, ys))
    }

    // xs pairwise distinct and as long as ys
    pub(crate) fn interpolate_unchecked(xs: &[BigRational], ys: &[BigRational]) -> Self {
        xs.iter()
            .zip(ys.iter())
            .map(|(x, y)| Self::basis(x, xs).scalar_mul(y))
            .sum()
    }

    fn scalar_mul(&self, scalar: &BigRational) -> Self {
        UnivariatePoly::new(self.coefficient.iter().map(|c| c * scalar).collect())
    }

    /*
        [1, 2, 3], x = 2
        L_2(x) = (x - 1)(x - 3)
                 --------------
                 (2 - 1)(2 - 3)
        the numerator is built as a product of [-x_j, 1] and the denominator is the numerator evaluated at x
    */
    fn basis(x: &BigRational, interpolating_set: &[BigRational]) -> Self {
        let numerator: UnivariatePoly = interpolating_set
            .iter()
            .filter(|val| *val != x)
            .map(|x_j| UnivariatePoly::new(vec![-x_j, BigRational::one()]))
            .product();

        let denominator = BigRational::one() / numerator.evaluate(x);

        numerator.scalar_mul(&denominator)
    }
}

impl Mul for &UnivariatePoly {
    type Output = UnivariatePoly;

    fn mul(self, rhs: Self) -> Self::Output {
        let new_degree = self.degree() + rhs.degree();
        let mut result = vec![BigRational::zero(); new_degree + 1];
        for (i, a) in self.coefficient.iter().enumerate() {
            for (j, b) in rhs.coefficient.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        UnivariatePoly::new(result)
    }
}

impl Add for &UnivariatePoly {
    type Output = UnivariatePoly;

    fn add(self, rhs: Self) -> Self::Output {
        let (mut bigger, smaller) = if self.degree() < rhs.degree() {
            (rhs.clone(), self)
        } else {
            (self.clone(), rhs)
        };

        bigger
            .coefficient
            .iter_mut()
            .zip(smaller.coefficient.iter())
            .for_each(|(b_coeff, s_coeff)| *b_coeff += s_coeff);

        // leading terms may cancel
        UnivariatePoly::new(bigger.coefficient)
    }
}

impl Sum for UnivariatePoly {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut result = UnivariatePoly::new(vec![BigRational::zero()]);
        for item in iter {
            result = &result + &item;
        }
        result
    }
}

impl Product for UnivariatePoly {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut result = UnivariatePoly::new(vec![BigRational::one()]);
        for item in iter {
            result = &result * &item;
        }
        result
    }
}
