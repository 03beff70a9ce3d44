//! Configuration validation for a reconstruction problem

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl ProblemConfig {
    /// Creates a new problem configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shareback::domain::{ProblemConfig, ShareCount, Threshold};
    ///
    /// let config = ProblemConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(4).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = ProblemConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            bail!(
                "Threshold {} cannot exceed share count {}",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
