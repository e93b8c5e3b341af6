//! Property tests for interpolation at zero

use num_bigint::BigInt;
use num_traits::{One, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use recombine::domain::DecodedShare;
use recombine::lagrange::interpolate_at_zero;

/// Integer polynomial of degree < k together with k distinct sample points
#[derive(Clone, Debug)]
struct SampledPolynomial {
    xs: Vec<u64>,
    coefficients: Vec<i64>,
}

impl Arbitrary for SampledPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 5 + 2; // 2..=6

        let mut xs = Vec::with_capacity(k);
        while xs.len() < k {
            let x = u64::arbitrary(g) % 20 + 1;
            if !xs.contains(&x) {
                xs.push(x);
            }
        }

        let coefficients = (0..k).map(|_| i64::arbitrary(g) % 1000).collect();

        SampledPolynomial { xs, coefficients }
    }
}

impl SampledPolynomial {
    /// Product of all pairwise x distances
    ///
    /// Every reduced basis denominator divides it, so scaling the polynomial
    /// by it makes each interpolation term an exact integer.
    fn scale(&self) -> BigInt {
        let mut scale = BigInt::one();
        for (i, &a) in self.xs.iter().enumerate() {
            for &b in &self.xs[i + 1..] {
                scale *= a.abs_diff(b);
            }
        }
        scale
    }

    fn evaluate(&self, x: u64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, &c| acc * &x + c)
    }

    fn shares(&self) -> Vec<DecodedShare> {
        let scale = self.scale();
        self.xs
            .iter()
            .map(|&x| DecodedShare::new(x, &scale * self.evaluate(x)))
            .collect()
    }
}

#[quickcheck]
fn prop_recovers_constant_term(polynomial: SampledPolynomial) -> bool {
    let expected = polynomial.scale() * polynomial.coefficients[0];
    interpolate_at_zero(&polynomial.shares()) == Ok(expected)
}

#[quickcheck]
fn prop_point_order_irrelevant(polynomial: SampledPolynomial, rotation: usize) -> bool {
    let shares = polynomial.shares();
    let mut rotated = shares.clone();
    rotated.rotate_left(rotation % shares.len());
    rotated.reverse();

    interpolate_at_zero(&shares) == interpolate_at_zero(&rotated)
}
