//! Share records, decoded points and the reconstructed secret

use num_bigint::BigInt;
use serde::Serialize;

/// One externally supplied share: an x-coordinate and a digit string in some base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    pub x: u64,
    pub base: u32,
    pub digits: String,
}

impl ShareRecord {
    pub fn new(x: u64, base: u32, digits: impl Into<String>) -> Self {
        Self {
            x,
            base,
            digits: digits.into(),
        }
    }
}

/// A share whose digit string has been decoded into the point `(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedShare {
    pub x: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub y: BigInt,
}

impl DecodedShare {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

/// The polynomial's value at x = 0
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Secret(BigInt);

impl Secret {
    #[must_use]
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl std::ops::Deref for Secret {
    type Target = BigInt;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Secret {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(&self.0, serializer)
    }
}

/// Big integers travel as decimal strings so JSON consumers never lose precision
fn serialize_decimal<S: serde::Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Anything that can hand the pipeline a problem instance.
///
/// The core never parses documents itself; [`crate::codec::ShareDocument`]
/// is the JSON implementation.
pub trait ShareRecordSource {
    /// Required number of shares (`k`), unvalidated
    fn threshold(&self) -> usize;

    /// Advisory total share count (`n`)
    fn declared_count(&self) -> usize;

    /// All records, in the order the selector should enumerate them
    fn records(&self) -> Vec<ShareRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_display_is_decimal() {
        let secret = Secret::new(BigInt::from(-42));
        assert_eq!(secret.to_string(), "-42");
    }

    #[test]
    fn test_decoded_share_serializes_y_as_string() {
        let share = DecodedShare::new(3, 12);
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!(json, r#"{"x":3,"y":"12"}"#);
    }
}
