//! Fixed-width numeric primitives.
//!
//! Wire layout:
//! ```text
//! unsigned short   2 bytes   little-endian
//! signed int       4 bytes   little-endian, two's complement
//! double           8 bytes   big-endian, IEEE-754 binary64 raw bits
//! ```
//! Integers are little-endian while doubles are big-endian. Both orders are
//! fixed by the protocol.

use bytes::{Buf, BufMut};

use crate::error::{CodecError, Result};

/// Size of an encoded unsigned short.
pub const SHORT_SIZE: usize = 2;

/// Size of an encoded signed int.
pub const INT_SIZE: usize = 4;

/// Size of an encoded double.
pub const DOUBLE_SIZE: usize = 8;

/// Decode a little-endian integer.
///
/// Two bytes are an unsigned 16-bit value, four bytes a signed 32-bit value.
/// Any other length fails with [`CodecError::InvalidLength`].
pub fn bytes_to_int(bytes: &[u8]) -> Result<i32> {
    let mut buf = bytes;
    match bytes.len() {
        SHORT_SIZE => Ok(i32::from(buf.get_u16_le())),
        INT_SIZE => Ok(buf.get_i32_le()),
        len => Err(CodecError::InvalidLength { target: "int", len }),
    }
}

/// Encode a signed 32-bit integer as 4 little-endian bytes.
pub fn int_to_bytes(i: i32) -> [u8; INT_SIZE] {
    let mut out = [0u8; INT_SIZE];
    (&mut out[..]).put_i32_le(i);
    out
}

/// Encode an unsigned 16-bit integer as 2 little-endian bytes.
pub fn short_to_bytes(s: u16) -> [u8; SHORT_SIZE] {
    let mut out = [0u8; SHORT_SIZE];
    (&mut out[..]).put_u16_le(s);
    out
}

/// Encode a double as its 8-byte big-endian bit pattern.
///
/// The raw bits are written, NaN payloads included.
pub fn double_to_bytes(d: f64) -> [u8; DOUBLE_SIZE] {
    let mut out = [0u8; DOUBLE_SIZE];
    (&mut out[..]).put_u64(d.to_bits());
    out
}

/// Decode an 8-byte big-endian bit pattern into a double.
pub fn bytes_to_double(bytes: &[u8]) -> Result<f64> {
    if bytes.len() != DOUBLE_SIZE {
        return Err(CodecError::InvalidLength {
            target: "double",
            len: bytes.len(),
        });
    }
    let mut buf = bytes;
    Ok(f64::from_bits(buf.get_u64()))
}
