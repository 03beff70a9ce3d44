//! JSON input format for reconstruction problems
//!
//! A problem file is a single JSON object. The `keys` entry carries `n` and `k`; every
//! other entry is a share keyed by its index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Shares keep their document order. Values are left encoded here; decoding happens in
//! [`crate::commands`].

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::warn;
use num_bigint::BigInt;
use num_traits::One;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ProblemConfig, ShareCount, Threshold};

/// Integer that may be written as a JSON number or a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    fn to_u64(&self, field: &str) -> Result<u64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("'{field}' is not a valid number: '{s}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: Numeric,
    k: Numeric,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: Numeric,
    value: String,
}

/// Top-level problem object
///
/// Shares are collected as a list rather than a map so that a repeated label keeps every
/// occurrence, in document order.
#[derive(Debug)]
struct RawProblem {
    keys: RawKeys,
    shares: Vec<(String, Value)>,
}

struct RawProblemVisitor;

impl<'de> Visitor<'de> for RawProblemVisitor {
    type Value = RawProblem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a problem object with a 'keys' entry")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<RawProblem, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys: Option<RawKeys> = None;
        let mut shares = Vec::new();

        while let Some(label) = map.next_key::<String>()? {
            if label == "keys" {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field("keys"));
                }
                keys = Some(map.next_value()?);
            } else {
                shares.push((label, map.next_value::<Value>()?));
            }
        }

        let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
        Ok(RawProblem { keys, shares })
    }
}

impl<'de> Deserialize<'de> for RawProblem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawProblemVisitor)
    }
}

/// One share as it appears in the input, value still encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    /// Share index, the `x` coordinate (>= 1)
    pub index: BigInt,
    /// Base the value is written in
    pub base: u32,
    /// Digit string in `base`
    pub value: String,
}

/// A parsed problem: validated configuration plus encoded shares in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemFile {
    pub config: ProblemConfig,
    pub records: Vec<ShareRecord>,
}

fn parse_index(label: &str) -> Result<BigInt> {
    let index: BigInt = label
        .trim()
        .parse()
        .with_context(|| format!("Share label '{label}' is not an integer"))?;

    if index < BigInt::one() {
        bail!("Share index must be at least 1 (got {index})");
    }
    Ok(index)
}

fn parse_record(label: &str, value: Value) -> Result<ShareRecord> {
    let index = parse_index(label)?;
    let raw: RawShare = serde_json::from_value(value)
        .with_context(|| format!("Share '{label}' must have 'base' and 'value' fields"))?;

    let base = raw.base.to_u64("base")?;
    let base =
        u32::try_from(base).with_context(|| format!("Base {base} of share '{label}' is too large"))?;

    Ok(ShareRecord {
        index,
        base,
        value: raw.value.trim().to_string(),
    })
}

/// Parses a problem from its JSON text
///
/// # Errors
/// Returns an error if the JSON is malformed, `keys` is missing or invalid, `k > n`, or a
/// share entry is malformed
pub fn parse_problem(json: &str) -> Result<ProblemFile> {
    let raw: RawProblem = serde_json::from_str(json).context("Failed to parse problem JSON")?;

    let n = raw.keys.n.to_u64("n")?;
    let k = raw.keys.k.to_u64("k")?;
    let share_count = ShareCount::new(usize::try_from(n).context("'n' is too large")?)?;
    let threshold = Threshold::new(usize::try_from(k).context("'k' is too large")?)?;
    let config = ProblemConfig::new(threshold, share_count)?;

    let records = raw
        .shares
        .into_iter()
        .map(|(label, value)| parse_record(&label, value))
        .collect::<Result<Vec<_>>>()?;

    if records.len() < *share_count {
        warn!(
            "Problem declares n = {} but contains only {} shares",
            *share_count,
            records.len()
        );
    }

    Ok(ProblemFile { config, records })
}

/// Reads and parses a problem file
///
/// # Errors
/// Returns an error if the file cannot be read or [`parse_problem`] fails
pub fn load_problem(path: &Path) -> Result<ProblemFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read problem file {}", path.display()))?;
    parse_problem(&json).with_context(|| format!("Invalid problem file {}", path.display()))
}
