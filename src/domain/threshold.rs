//! Threshold newtype for secret reconstruction

use crate::error::{RecoverError, Result};

/// Number of shares needed to reconstruct a secret (k >= 2)
///
/// Invariant: threshold >= 2 (enforced at construction)
/// A single point cannot pin down a polynomial, so k = 1 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Smallest accepted threshold
    pub const MIN: usize = 2;

    /// Creates a new threshold, returning an error if value < 2
    ///
    /// # Errors
    /// Returns [`RecoverError::ThresholdTooLow`] if the threshold is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            return Err(RecoverError::ThresholdTooLow(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
