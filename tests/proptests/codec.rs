//! Property tests for base decoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shareback::RecoverError;
use shareback::codec::{MAX_BASE, MIN_BASE, decode, encode};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Wrapper for supported bases (2..=36)
#[derive(Clone, Copy, Debug)]
struct ValidBase(u32);

impl Arbitrary for ValidBase {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidBase(MIN_BASE + u32::arbitrary(g) % (MAX_BASE - MIN_BASE + 1))
    }
}

/// Wrapper for arbitrary unbounded integers
#[derive(Clone, Debug)]
struct BigNumber(BigUint);

impl Arbitrary for BigNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        BigNumber(BigUint::new(Vec::<u32>::arbitrary(g)))
    }
}

/// Wrapper for a base and a non-empty digit string valid in it, in mixed case
#[derive(Clone, Debug)]
struct DigitString {
    base: u32,
    digits: String,
}

impl Arbitrary for DigitString {
    fn arbitrary(g: &mut Gen) -> Self {
        let ValidBase(base) = ValidBase::arbitrary(g);
        let len = usize::arbitrary(g) % 40 + 1;

        let digits = (0..len)
            .map(|_| {
                let c = char::from(ALPHABET[(u32::arbitrary(g) % base) as usize]);
                if bool::arbitrary(g) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        DigitString { base, digits }
    }
}

/// Test that decoding an encoded number returns the number
#[quickcheck]
fn prop_encode_decode_round_trip(base: ValidBase, number: BigNumber) -> bool {
    let ValidBase(base) = base;
    let BigNumber(number) = number;

    let Ok(digits) = encode(base, &number) else {
        return false;
    };
    decode(base, &digits) == Ok(number)
}

/// Test that re-encoding a decoded string yields its canonical form
#[quickcheck]
fn prop_canonical_digit_string(input: DigitString) -> bool {
    let Ok(value) = decode(input.base, &input.digits) else {
        return false;
    };

    let lowered = input.digits.to_ascii_lowercase();
    let trimmed = lowered.trim_start_matches('0');
    let canonical = if trimmed.is_empty() { "0" } else { trimmed };

    encode(input.base, &value).as_deref() == Ok(canonical)
}

/// Test that short strings agree with the standard library's radix parser
#[quickcheck]
fn prop_matches_native_radix_parse(input: DigitString) -> bool {
    let digits: String = input.digits.chars().take(12).collect();
    let Ok(native) = u64::from_str_radix(&digits, input.base) else {
        return false;
    };
    decode(input.base, &digits) == Ok(BigUint::from(native))
}

/// Test that any digit at or above the base is rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(input: DigitString, position: usize) -> bool {
    if input.base == MAX_BASE {
        return true;
    }

    let bad = char::from(ALPHABET[input.base as usize]);
    let mut chars: Vec<char> = input.digits.chars().collect();
    let at = position % chars.len();
    chars[at] = bad;
    let corrupted: String = chars.into_iter().collect();

    decode(input.base, &corrupted)
        == Err(RecoverError::InvalidDigit {
            digit: bad,
            base: input.base,
        })
}

/// Test that unsupported bases are rejected regardless of digits
#[quickcheck]
fn prop_invalid_base_rejected(base: u32, input: DigitString) -> bool {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        return true;
    }
    decode(base, &input.digits) == Err(RecoverError::InvalidBase { base })
}
