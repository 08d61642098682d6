//! Arbitrary-precision integers.
//!
//! The wire form is little-endian two's complement of minimal length. Decoded
//! values are narrowed to `i64` whenever they fit, so callers only see
//! [`Number::Big`] for values outside the 64-bit signed range.

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use tracing::debug;

/// An integer decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    /// Fits in a 64-bit signed integer.
    Int(i64),
    /// Outside the 64-bit signed range.
    Big(BigInt),
}

impl Number {
    /// True for the arbitrary-precision variant.
    pub fn is_wide(&self) -> bool {
        matches!(self, Number::Big(_))
    }

    /// The value as `i64`, if it is the narrow variant.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(*v),
            Number::Big(_) => None,
        }
    }

    /// The value widened to an arbitrary-precision integer.
    pub fn to_bigint(&self) -> BigInt {
        match self {
            Number::Int(v) => BigInt::from(*v),
            Number::Big(v) => v.clone(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        optimize_bigint(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Big(v) => write!(f, "{v}"),
        }
    }
}

/// Decode little-endian two's-complement bytes of any length.
///
/// An empty group is zero.
pub fn decode_long(bytes: &[u8]) -> Number {
    if bytes.is_empty() {
        return Number::Int(0);
    }
    optimize_bigint(BigInt::from_signed_bytes_le(bytes))
}

/// Encode to the minimal little-endian two's-complement form.
///
/// Zero encodes as a single `0x00` byte.
pub fn encode_long(value: &BigInt) -> Vec<u8> {
    value.to_signed_bytes_le()
}

/// Encode either variant of a [`Number`].
pub fn encode_number(value: &Number) -> Vec<u8> {
    match value {
        Number::Int(v) => encode_long(&BigInt::from(*v)),
        Number::Big(v) => encode_long(v),
    }
}

/// Narrow to [`Number::Int`] when the value lies within the `i64` range.
///
/// Total and idempotent: it never fails and re-optimizing a result is a no-op.
pub fn optimize_bigint(value: BigInt) -> Number {
    match value.sign() {
        Sign::NoSign => Number::Int(0),
        Sign::Plus | Sign::Minus => match value.to_i64() {
            Some(v) => Number::Int(v),
            None => {
                debug!(bits = value.bits(), "integer stays arbitrary-precision");
                Number::Big(value)
            }
        },
    }
}
