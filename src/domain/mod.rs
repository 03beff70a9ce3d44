//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes describing one problem instance:
//! - [`Threshold`] - Shares needed to reconstruct, `k` (at least 1)
//! - [`ShareCount`] - Total shares declared by the dealer, `n` (at least 1)
//! - [`ProblemConfig`] - Validated threshold and share count pair
//! - [`Share`] - One decoded `(x, y)` point
//! - [`ProblemInstance`] - Configuration plus shares in input order

mod config;
mod instance;
mod share;
mod share_count;
mod threshold;

pub use config::ProblemConfig;
pub use instance::ProblemInstance;
pub use share::Share;
pub use share_count::ShareCount;
pub use threshold::Threshold;
