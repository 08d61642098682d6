//! Byte-level wire primitives for pickle-style object serialization.
//!
//! This is the layer beneath opcode dispatch. It knows how to pull bytes off a
//! blocking source and how to turn small byte groups into values:
//! - Fixed-width integers: 2-byte unsigned and 4-byte signed, little-endian
//! - IEEE-754 doubles: 8 bytes, big-endian raw bit pattern
//! - Arbitrary-precision integers: little-endian two's complement, minimal length
//! - Backslash-escaped literals (`\\`, `\xHH`, `\uHHHH`) and raw byte strings
//!
//! Integers and doubles deliberately use opposite byte orders. That asymmetry
//! is part of the wire format.

pub mod bigint;
pub mod error;
pub mod escape;
pub mod fixed;
pub mod reader;

pub use bigint::{decode_long, encode_long, encode_number, optimize_bigint, Number};
pub use error::{CodecError, ErrorKind, EscapeFault, Result};
pub use escape::{
    bytes_from_raw_string, decode_escaped, decode_unicode_escaped, raw_string_from_bytes,
};
pub use fixed::{bytes_to_double, bytes_to_int, double_to_bytes, int_to_bytes, short_to_bytes};
pub use reader::{ReaderConfig, StreamReader, DEFAULT_LINE_CAPACITY};

pub use num_bigint::BigInt;
