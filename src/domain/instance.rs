//! A complete reconstruction problem

use anyhow::Result;

use super::{ProblemConfig, Share};
use crate::error::RecoverError;

/// Problem configuration together with its shares in input order
///
/// Invariant: at least `k` shares are present. Only the first `k` take part in
/// reconstruction; the rest are available for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    config: ProblemConfig,
    shares: Vec<Share>,
}

impl ProblemInstance {
    /// Creates a problem instance
    ///
    /// # Errors
    /// Returns [`RecoverError::InsufficientShares`] if fewer than `k` shares are given
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shareback::domain::{ProblemConfig, ProblemInstance, Share, ShareCount, Threshold};
    ///
    /// let config = ProblemConfig::new(Threshold::new(2)?, ShareCount::new(3)?)?;
    ///
    /// let instance = ProblemInstance::new(config, vec![Share::new(1, 3), Share::new(2, 5)])?;
    /// assert_eq!(instance.selected().len(), 2);
    /// assert!(instance.extra().is_empty());
    ///
    /// // Too few shares for the threshold
    /// assert!(ProblemInstance::new(config, vec![Share::new(1, 3)]).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn new(config: ProblemConfig, shares: Vec<Share>) -> Result<Self> {
        let required = *config.threshold();
        if shares.len() < required {
            return Err(RecoverError::InsufficientShares {
                required,
                available: shares.len(),
            }
            .into());
        }
        Ok(Self { config, shares })
    }

    #[must_use]
    pub fn config(&self) -> ProblemConfig {
        self.config
    }

    /// All shares, in input order
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The first `k` shares, which determine the polynomial
    #[must_use]
    pub fn selected(&self) -> &[Share] {
        &self.shares[..*self.config.threshold()]
    }

    /// Shares beyond the first `k`
    #[must_use]
    pub fn extra(&self) -> &[Share] {
        &self.shares[*self.config.threshold()..]
    }
}
