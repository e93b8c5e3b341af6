//! `Radix` newtype for share digit strings

use crate::error::{RecoverError, Result};

/// Numeric base of a share's digit string (2..=36)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (digits `0-9` then `a-z`)
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`RecoverError::InvalidBase`] outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::Radix;
    ///
    /// assert_eq!(*Radix::new(16).unwrap(), 16);
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RecoverError::InvalidBase(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
