//! Recover the constant term of a threshold secret-sharing polynomial
//!
//! Shares arrive as digit strings in arbitrary bases. [`codec`] decodes them into exact
//! integers and [`interpolate`] evaluates the Lagrange interpolant at zero using exact
//! rational arithmetic, so the secret is reconstructed without loss of precision.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;

pub use error::{RecoverError, Result};
