use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use num_bigint::BigInt;

use crate::codec;
use crate::domain::{ProblemInstance, Share};
use crate::input::{self, ProblemFile, ShareRecord};
use crate::interpolate::{self, Fraction, Interpolant};

/// Outcome of solving one problem instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The reconstructed constant term
    pub secret: BigInt,
    /// Indices of extra shares that do not lie on the recovered polynomial
    ///
    /// Always empty unless verification was requested.
    pub mismatched: Vec<BigInt>,
}

/// Decode a single share record into an `(x, y)` point
///
/// # Errors
/// Returns an error if the base is unsupported or the value has invalid digits
pub fn decode_share(record: &ShareRecord) -> Result<Share> {
    let value = codec::decode(record.base, &record.value).with_context(|| {
        format!(
            "Failed to decode share {} (base {}, value '{}')",
            record.index, record.base, record.value
        )
    })?;

    debug!("Share {}: base {} -> {}", record.index, record.base, value);

    Ok(Share::new(record.index.clone(), BigInt::from(value)))
}

/// Decode every share of a parsed problem and build the problem instance
///
/// All shares are decoded, including those past the threshold, so a corrupt value
/// anywhere in the input is reported.
///
/// # Errors
/// Returns an error if any share fails to decode or fewer than `k` shares are present
pub fn build_instance(problem: &ProblemFile) -> Result<ProblemInstance> {
    let shares = problem
        .records
        .iter()
        .map(decode_share)
        .collect::<Result<Vec<_>>>()?;

    ProblemInstance::new(problem.config, shares)
}

/// Reconstruct the secret from the first `k` shares of an instance
///
/// # Errors
/// Returns an error if the selected shares repeat an index or do not interpolate to an
/// integer
pub fn recover_secret(instance: &ProblemInstance) -> Result<BigInt> {
    let threshold = *instance.config().threshold();
    let secret = interpolate::evaluate_at_zero(instance.selected(), threshold)
        .with_context(|| format!("Failed to interpolate secret from {threshold} shares"))?;

    info!("Recovered secret {secret} from {threshold} shares");
    Ok(secret)
}

/// Check every share beyond the first `k` against the polynomial they determine
///
/// Returns the indices of shares whose value disagrees with the polynomial.
///
/// # Errors
/// Returns an error if the selected shares repeat an index
pub fn verify_shares(instance: &ProblemInstance) -> Result<Vec<BigInt>> {
    let threshold = *instance.config().threshold();
    let polynomial = Interpolant::new(instance.selected(), threshold)
        .context("Failed to interpolate polynomial for verification")?;

    let mut mismatched = Vec::new();
    for share in instance.extra() {
        let expected = polynomial.evaluate(share.x());

        if expected != Fraction::from(share.y().clone()) {
            warn!(
                "Share {} does not lie on the polynomial: expected {}, got {}",
                share.x(),
                expected,
                share.y()
            );
            mismatched.push(share.x().clone());
        }
    }

    Ok(mismatched)
}

/// Solve a problem given as JSON text
///
/// # Errors
/// Returns an error if parsing, decoding, interpolation or verification fails
pub fn solve_json(json: &str, verify: bool) -> Result<Recovery> {
    let problem = input::parse_problem(json)?;
    solve_problem(&problem, verify)
}

/// Solve a problem stored in a JSON file
///
/// # Errors
/// Returns an error if the file cannot be loaded or solving fails
pub fn solve_file(path: &Path, verify: bool) -> Result<Recovery> {
    let problem = input::load_problem(path)?;
    solve_problem(&problem, verify)
        .with_context(|| format!("Failed to solve problem {}", path.display()))
}

fn solve_problem(problem: &ProblemFile, verify: bool) -> Result<Recovery> {
    let instance = build_instance(problem)?;
    let secret = recover_secret(&instance)?;

    let mismatched = if verify {
        verify_shares(&instance)?
    } else {
        Vec::new()
    };

    Ok(Recovery { secret, mismatched })
}
