//! Positional decoding of share values written in bases 2 through 36
//!
//! Digits are `0-9` followed by `a-z`, case-insensitive. Values are unsigned
//! and unbounded: the result is a [`BigInt`] so shares wider than 64 bits
//! decode exactly.
//!
//! ```rust
//! use num_bigint::BigInt;
//! use recombine::radix::decode_digits;
//!
//! assert_eq!(decode_digits("111", 2).unwrap(), BigInt::from(7));
//! assert_eq!(decode_digits("FF", 16).unwrap(), BigInt::from(255));
//! assert!(decode_digits("12", 2).is_err());
//! ```

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::domain::Radix;
use crate::error::{RecoverError, Result};

/// Decodes `digits` as a non-negative integer in `base`, most significant digit first
///
/// An empty string decodes to zero.
///
/// # Errors
/// Returns [`RecoverError::InvalidBase`] if `base` is outside 2..=36, or
/// [`RecoverError::InvalidCharacter`] for the first character that is not a
/// digit of `base`
pub fn decode_digits(digits: &str, base: u32) -> Result<BigInt> {
    let radix = Radix::new(base)?;

    let mut value = BigUint::zero();
    for (position, character) in digits.chars().enumerate() {
        let digit = digit_value(character, radix).ok_or(RecoverError::InvalidCharacter {
            character,
            position,
            base,
        })?;
        value = value * *radix + digit;
    }

    Ok(BigInt::from(value))
}

/// Encodes a non-negative value in `radix` using lowercase digits
///
/// Inverse of [`decode_digits`] up to leading zeros and letter case.
#[must_use]
pub fn encode_digits(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(*radix)
}

/// Maps `0-9`, `a-z` and `A-Z` to 0..36, rejecting anything not below `radix`
fn digit_value(character: char, radix: Radix) -> Option<u32> {
    character
        .to_digit(Radix::MAX)
        .filter(|&digit| digit < *radix)
}
