//! Lagrange interpolation at x = 0 over the integers
//!
//! Each point contributes `y_i * L_i(0)` where
//!
//! ```text
//! L_i(0) = prod_{j != i} (0 - x_j) / prod_{j != i} (x_i - x_j)
//! ```
//!
//! The basis fraction is sign-normalised (positive denominator) and reduced
//! by its gcd, then each weighted term is divided on its own, truncating
//! toward zero, before the terms are summed. That per-term division is exact
//! only when every term is an integer. Inputs where some `y_i * L_i(0)` is
//! fractional come back truncated rather than rejected:
//!
//! ```rust
//! use num_bigint::BigInt;
//! use recombine::domain::DecodedShare;
//! use recombine::lagrange::interpolate_at_zero;
//!
//! // The constant polynomial 1 sampled at x = 1, 2, 4. The basis weights are
//! // 8/3, -2 and 1/3, so two terms truncate and the sum is 0, not 1.
//! let points = [
//!     DecodedShare::new(1, 1),
//!     DecodedShare::new(2, 1),
//!     DecodedShare::new(4, 1),
//! ];
//! assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(0));
//! ```

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::domain::DecodedShare;
use crate::error::{RecoverError, Result};

/// Evaluates the polynomial through `points` at x = 0
///
/// Point order does not affect the result.
///
/// # Errors
/// Returns [`RecoverError::InsufficientPoints`] for fewer than two points and
/// [`RecoverError::DuplicateCoordinate`] when two points share an x
pub fn interpolate_at_zero(points: &[DecodedShare]) -> Result<BigInt> {
    if points.len() < 2 {
        return Err(RecoverError::InsufficientPoints(points.len()));
    }

    let mut constant_term = BigInt::zero();

    for (i, point) in points.iter().enumerate() {
        let xi = BigInt::from(point.x);
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if other.x == point.x {
                return Err(RecoverError::DuplicateCoordinate(point.x));
            }
            let xj = BigInt::from(other.x);
            numerator *= -&xj;
            denominator *= &xi - &xj;
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let divisor = numerator.gcd(&denominator);
        numerator /= &divisor;
        denominator /= &divisor;

        // BigInt division truncates toward zero.
        constant_term += (&point.y * &numerator) / &denominator;
    }

    Ok(constant_term)
}
