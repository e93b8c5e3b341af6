//! Parameters of one reconstruction problem

use super::{ShareCount, Threshold};

/// A way in which a document's declared `n` disagrees with the rest of it
///
/// `n` is advisory: none of these stop a reconstruction, they are reported
/// and the pipeline decides from the shares actually supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMismatch {
    /// `k` asks for more shares than `n` declares
    ThresholdAboveDeclared { threshold: usize, declared: usize },
    /// The number of share entries differs from `n`
    SuppliedDiffers { declared: usize, supplied: usize },
}

impl std::fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThresholdAboveDeclared {
                threshold,
                declared,
            } => write!(f, "threshold {threshold} exceeds declared share count {declared}"),
            Self::SuppliedDiffers { declared, supplied } => {
                write!(f, "{supplied} shares supplied but {declared} declared")
            }
        }
    }
}

/// Threshold of a problem plus its declared share count, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemConfig {
    threshold: Threshold,
    declared: Option<ShareCount>,
}

impl ProblemConfig {
    /// Creates a problem configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::{CountMismatch, ProblemConfig, ShareCount, Threshold};
    ///
    /// let config = ProblemConfig::new(Threshold::new(3).unwrap(), ShareCount::new(2).ok());
    ///
    /// // Accepted, only flagged: the shares on hand decide.
    /// assert_eq!(
    ///     config.mismatches(3),
    ///     vec![
    ///         CountMismatch::ThresholdAboveDeclared { threshold: 3, declared: 2 },
    ///         CountMismatch::SuppliedDiffers { declared: 2, supplied: 3 },
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn new(threshold: Threshold, declared: Option<ShareCount>) -> Self {
        Self {
            threshold,
            declared,
        }
    }

    /// Gets the threshold
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the declared share count, when the document states one
    #[must_use]
    pub fn declared(&self) -> Option<ShareCount> {
        self.declared
    }

    /// Same declared count, different threshold
    #[must_use]
    pub fn with_threshold(self, threshold: Threshold) -> Self {
        Self { threshold, ..self }
    }

    /// Lists every disagreement between `k`, `n` and the `supplied` share total
    #[must_use]
    pub fn mismatches(&self, supplied: usize) -> Vec<CountMismatch> {
        let Some(declared) = self.declared.map(|count| *count) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        if *self.threshold > declared {
            found.push(CountMismatch::ThresholdAboveDeclared {
                threshold: *self.threshold,
                declared,
            });
        }
        if supplied != declared {
            found.push(CountMismatch::SuppliedDiffers { declared, supplied });
        }
        found
    }
}
