//! `ShareCount` newtype for secret reconstruction

use anyhow::{Result, bail};

/// Total number of shares the dealer produced (`n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shareback::domain::ShareCount;
    ///
    /// let count = ShareCount::new(10).unwrap();
    /// assert_eq!(*count, 10);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least {}", Self::MIN);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
