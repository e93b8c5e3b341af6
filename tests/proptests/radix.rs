//! Property tests for positional decoding

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use recombine::RecoverError;
use recombine::domain::Radix;
use recombine::radix::{decode_digits, encode_digits};

/// A base and a string of at most 12 valid digits for it, in mixed case
///
/// 12 base-36 digits stay below `u64::MAX`, so the standard library parser
/// can serve as an oracle.
#[derive(Clone, Debug)]
struct DigitString {
    digits: String,
    base: u32,
}

impl Arbitrary for DigitString {
    fn arbitrary(g: &mut Gen) -> Self {
        let base = u32::arbitrary(g) % 35 + 2; // 2..=36
        let len = usize::arbitrary(g) % 13;

        let digits = (0..len)
            .map(|_| {
                let digit = u32::arbitrary(g) % base;
                let c = char::from_digit(digit, 36).unwrap_or('0');
                if bool::arbitrary(g) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        DigitString { digits, base }
    }
}

#[quickcheck]
fn prop_decode_matches_positional_value(input: DigitString) -> bool {
    let expected = if input.digits.is_empty() {
        0
    } else {
        u64::from_str_radix(&input.digits, input.base).unwrap()
    };

    decode_digits(&input.digits, input.base) == Ok(BigInt::from(expected))
}

#[quickcheck]
fn prop_encoded_value_decodes_back(value: u64, base: u32) -> bool {
    let base = base % 35 + 2;
    let radix = Radix::new(base).unwrap();

    let encoded = encode_digits(&BigUint::from(value), radix);
    decode_digits(&encoded, base) == Ok(BigInt::from(value))
}

#[quickcheck]
fn prop_out_of_range_digit_rejected(input: DigitString, position: usize, excess: u32) -> TestResult {
    if input.base == 36 || input.digits.is_empty() {
        return TestResult::discard();
    }

    let position = position % input.digits.len();
    let bad_digit = input.base + excess % (36 - input.base);
    let bad_char = char::from_digit(bad_digit, 36).unwrap();

    let mut chars: Vec<char> = input.digits.chars().collect();
    chars[position] = bad_char;
    let corrupted: String = chars.into_iter().collect();

    let result = decode_digits(&corrupted, input.base);

    // Only the first bad character is reported.
    let first_bad = corrupted
        .chars()
        .position(|c| c.to_digit(36).is_none_or(|d| d >= input.base))
        .unwrap();

    TestResult::from_bool(matches!(
        result,
        Err(RecoverError::InvalidCharacter { position: p, base, .. })
            if p == first_bad && base == input.base
    ))
}
