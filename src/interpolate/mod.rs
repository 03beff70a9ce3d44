//! Exact Lagrange interpolation over the rationals
//!
//! The secret is the constant term of a polynomial of degree `k - 1`, recovered from the
//! first `k` shares by evaluating the Lagrange interpolant at zero:
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Every basis coefficient is kept as an exact [`Fraction`], so no precision is lost to
//! division. The final sum must collapse to an integer; anything else is reported as
//! [`RecoverError::NonIntegralResult`].

mod fraction;

pub use fraction::Fraction;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::domain::Share;
use crate::error::{RecoverError, Result};

fn select(points: &[Share], count: usize) -> Result<&[Share]> {
    if count == 0 || points.len() < count {
        return Err(RecoverError::InsufficientShares {
            required: count.max(1),
            available: points.len(),
        });
    }
    Ok(&points[..count])
}

/// Evaluates the interpolating polynomial through the first `count` points at `at`
///
/// # Errors
/// - [`RecoverError::InsufficientShares`] if `count` is zero or exceeds `points.len()`
/// - [`RecoverError::DuplicateShareIndex`] if two selected points share an `x`
pub fn evaluate_at(points: &[Share], count: usize, at: &BigInt) -> Result<Fraction> {
    let selected = select(points, count)?;

    let mut result = Fraction::zero();
    for (i, share_i) in selected.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, share_j) in selected.iter().enumerate() {
            if i != j {
                numerator *= at - share_j.x();
                denominator *= share_i.x() - share_j.x();
            }
        }

        // A zero denominator means some other selected share has the same x
        let basis = Fraction::new(numerator, denominator).ok_or_else(|| {
            RecoverError::DuplicateShareIndex {
                x: share_i.x().clone(),
            }
        })?;
        let term = &Fraction::from(share_i.y().clone()) * &basis;
        result = &result + &term;
    }

    Ok(result)
}

/// The polynomial through a fixed set of shares, ready for repeated evaluation
///
/// Construction computes the barycentric weights `y_i / Π_{j≠i} (x_i - x_j)` once in
/// O(k²); each [`Interpolant::evaluate`] then costs O(k) big-integer operations.
#[derive(Debug, Clone)]
pub struct Interpolant {
    nodes: Vec<(BigInt, BigInt, Fraction)>,
}

impl Interpolant {
    /// Builds the interpolant through the first `count` points
    ///
    /// # Errors
    /// - [`RecoverError::InsufficientShares`] if `count` is zero or exceeds `points.len()`
    /// - [`RecoverError::DuplicateShareIndex`] if two selected points share an `x`
    pub fn new(points: &[Share], count: usize) -> Result<Self> {
        let selected = select(points, count)?;

        let nodes = selected
            .iter()
            .enumerate()
            .map(|(i, share_i)| {
                let denominator = selected
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(BigInt::one(), |acc, (_, share_j)| {
                        acc * (share_i.x() - share_j.x())
                    });

                Fraction::new(share_i.y().clone(), denominator)
                    .map(|weight| (share_i.x().clone(), share_i.y().clone(), weight))
                    .ok_or_else(|| RecoverError::DuplicateShareIndex {
                        x: share_i.x().clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { nodes })
    }

    /// Evaluates the polynomial at `at`
    #[must_use]
    pub fn evaluate(&self, at: &BigInt) -> Fraction {
        if let Some((_, y, _)) = self.nodes.iter().find(|(x, _, _)| x == at) {
            return Fraction::from(y.clone());
        }

        // Π_j (at - x_j); every factor is non-zero here
        let product = self
            .nodes
            .iter()
            .fold(BigInt::one(), |acc, (x, _, _)| acc * (at - x));

        self.nodes
            .iter()
            .fold(Fraction::zero(), |acc, (x, _, weight)| {
                // Exact: (at - x_i) divides the full product
                let others = Fraction::from(&product / (at - x));
                &acc + &(weight * &others)
            })
    }
}

/// Recovers the secret `f(0)` from the first `count` shares
///
/// Only `points[..count]` are read; any further shares are ignored.
///
/// # Errors
/// - [`RecoverError::InsufficientShares`] if `count` is zero or exceeds `points.len()`
/// - [`RecoverError::DuplicateShareIndex`] if two selected shares share an `x`
/// - [`RecoverError::NonIntegralResult`] if the interpolated value is not an integer
pub fn evaluate_at_zero(points: &[Share], count: usize) -> Result<BigInt> {
    evaluate_at(points, count, &BigInt::zero())?.into_integer()
}
