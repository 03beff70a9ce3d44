//! Positional base decoding for share values
//!
//! Share values arrive as digit strings in a stated base between 2 and 36. Digits map
//! case-insensitively onto `0-9` then `a-z`, so base 16 accepts both `ff` and `FF`.
//! Values routinely exceed `u128`, so accumulation happens in a [`BigUint`].
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use shareback::codec::{decode, encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode(2, "1010")?, BigUint::from(10u32));
//! assert_eq!(decode(16, "FF")?, BigUint::from(255u32));
//!
//! // Encoding produces the canonical lowercase form
//! assert_eq!(encode(16, &BigUint::from(255u32))?, "ff");
//!
//! // Digits must fit the base
//! assert!(decode(8, "9").is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{RecoverError, Result};

/// Smallest supported base
pub const MIN_BASE: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`)
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RecoverError::InvalidBase { base })
    }
}

/// Maps an ASCII alphanumeric character to its digit value (0..=35)
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decodes a digit string in `base` into an exact unsigned integer
///
/// Leading zeros are accepted and do not change the value.
///
/// # Errors
/// - [`RecoverError::InvalidBase`] if `base` is outside `2..=36`
/// - [`RecoverError::EmptyValue`] if `digits` is empty
/// - [`RecoverError::InvalidDigit`] for the first character that is not alphanumeric or
///   whose value is not below `base`
pub fn decode(base: u32, digits: &str) -> Result<BigUint> {
    check_base(base)?;

    if digits.is_empty() {
        return Err(RecoverError::EmptyValue);
    }

    let mut value = BigUint::zero();
    for c in digits.chars() {
        let digit = digit_value(c)
            .filter(|&d| d < base)
            .ok_or(RecoverError::InvalidDigit { digit: c, base })?;
        value = value * base + digit;
    }

    Ok(value)
}

/// Encodes `value` as a canonical lowercase digit string in `base`
///
/// Zero encodes as `"0"`; no other output has leading zeros.
///
/// # Errors
/// Returns [`RecoverError::InvalidBase`] if `base` is outside `2..=36`
pub fn encode(base: u32, value: &BigUint) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
