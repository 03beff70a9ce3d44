//! Property tests for exact Lagrange interpolation

use num_bigint::BigInt;
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shareback::RecoverError;
use shareback::domain::Share;
use shareback::interpolate::evaluate_at_zero;

/// Wrapper for an integer polynomial sampled at distinct positive indices
#[derive(Clone, Debug)]
struct SampledPolynomial {
    coefficients: Vec<i64>,
    shares: Vec<Share>,
}

/// Strictly increasing positive indices, so they are always distinct
fn distinct_indices(g: &mut Gen, count: usize) -> Vec<i64> {
    let mut next = 0i64;
    (0..count)
        .map(|_| {
            next += i64::from(u8::arbitrary(g) % 20) + 1;
            next
        })
        .collect()
}

fn evaluate(coefficients: &[i64], x: i64) -> BigInt {
    // Horner's rule in exact arithmetic
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &c| acc * x + c)
}

impl Arbitrary for SampledPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep degree reasonable for testing (threshold 1..=7)
        let threshold = usize::arbitrary(g) % 7 + 1;
        let coefficients: Vec<i64> = (0..threshold).map(|_| i64::arbitrary(g)).collect();

        // Provide a few shares beyond the threshold
        let extra = usize::arbitrary(g) % 3;
        let shares = distinct_indices(g, threshold + extra)
            .into_iter()
            .map(|x| Share::new(x, evaluate(&coefficients, x)))
            .collect();

        SampledPolynomial {
            coefficients,
            shares,
        }
    }
}

/// Wrapper for arbitrary points with distinct indices and a reordering of them
#[derive(Clone, Debug)]
struct ShuffledPoints {
    original: Vec<Share>,
    shuffled: Vec<Share>,
}

impl Arbitrary for ShuffledPoints {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 6 + 1;
        let original: Vec<Share> = distinct_indices(g, count)
            .into_iter()
            .map(|x| Share::new(x, i64::arbitrary(g)))
            .collect();

        let mut shuffled = original.clone();
        let rotation = usize::arbitrary(g) % count;
        shuffled.rotate_left(rotation);
        if bool::arbitrary(g) {
            shuffled.reverse();
        }
        if count > 1 && bool::arbitrary(g) {
            shuffled.swap(0, 1);
        }

        ShuffledPoints { original, shuffled }
    }
}

/// Test that the constant term is recovered from exactly k shares
#[quickcheck]
fn prop_recovers_constant_term(poly: SampledPolynomial) -> bool {
    let threshold = poly.coefficients.len();
    evaluate_at_zero(&poly.shares, threshold) == Ok(BigInt::from(poly.coefficients[0]))
}

/// Test that any k-sized window of shares recovers the same secret
#[quickcheck]
fn prop_any_share_window_agrees(poly: SampledPolynomial) -> bool {
    let threshold = poly.coefficients.len();
    let expected = Ok(BigInt::from(poly.coefficients[0]));

    (0..=poly.shares.len() - threshold)
        .all(|start| evaluate_at_zero(&poly.shares[start..], threshold) == expected)
}

/// Test that the result, integral or not, ignores share order
#[quickcheck]
fn prop_permutation_invariant(points: ShuffledPoints) -> bool {
    let count = points.original.len();
    evaluate_at_zero(&points.original, count) == evaluate_at_zero(&points.shuffled, count)
}

/// Test that a single share yields its own value
#[quickcheck]
fn prop_single_share_is_secret(x: u32, y: i64) -> bool {
    let share = Share::new(u64::from(x) + 1, y);
    evaluate_at_zero(&[share], 1) == Ok(BigInt::from(y))
}

/// Test that a repeated index among the selected shares is reported, never a panic
#[quickcheck]
fn prop_duplicate_index_rejected(poly: SampledPolynomial, y: i64) -> bool {
    let mut shares = poly.shares.clone();
    let duplicate = shares[0].x().clone();
    shares.insert(1, Share::new(duplicate.clone(), y));

    let threshold = poly.coefficients.len().max(2);
    evaluate_at_zero(&shares, threshold) == Err(RecoverError::DuplicateShareIndex { x: duplicate })
}
