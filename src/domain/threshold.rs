//! Threshold newtype for secret reconstruction

use anyhow::Result;

/// Number of shares needed to reconstruct the secret (`k`)
///
/// Invariant: threshold >= 1 (enforced at construction).
/// The threshold is the polynomial degree plus one; `k = 1` is a constant polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns an error if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shareback::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // A single share is enough for a constant polynomial
    /// assert!(Threshold::new(1).is_ok());
    ///
    /// // Invalid: at least one share is always needed
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
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
