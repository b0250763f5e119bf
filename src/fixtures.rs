use num_bigint::BigInt;
use num_rational::BigRational;
use rand::rngs::StdRng;
use rand::Rng;

use crate::point::Point;
use crate::polynomial::UnivariatePoly;

// generate distinct x values in 1..x_max, kept in the order they were drawn
pub fn generate_x_values(rng: &mut StdRng, num_points: usize, x_max: u64) -> Vec<u64> {
    let mut x_values = Vec::with_capacity(num_points);
    while x_values.len() < num_points {
        let x = rng.gen_range(1..x_max);
        if !x_values.contains(&x) {
            x_values.push(x);
        }
    }
    x_values
}

/*
    Random integer polynomial with `degree + 1` coefficients. Each coefficient is a small
    random integer scaled by 10^magnitude, so large magnitudes exercise values far past
    what an f64 or a fixed decimal precision can hold.
*/
pub fn random_polynomial(rng: &mut StdRng, degree: usize, magnitude: u32) -> UnivariatePoly {
    let scale = BigInt::from(10u32).pow(magnitude);
    UnivariatePoly::from_integers(
        (0..=degree).map(|_| BigInt::from(rng.gen_range(-1_000_000i64..1_000_000)) * &scale),
    )
}

pub fn sample_points(poly: &UnivariatePoly, xs: &[u64]) -> Vec<Point> {
    xs.iter()
        .map(|&x| {
            let y = poly.evaluate(&BigRational::from_integer(BigInt::from(x)));
            Point::new(x, y.to_integer())
        })
        .collect()
}
