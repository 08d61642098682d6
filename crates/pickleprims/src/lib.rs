//! Wire primitives for pickle-style object serialization.
//!
//! pickleprims is the byte-codec layer an unpickler sits on: blocking stream
//! reads, fixed-width numbers, arbitrary-precision integers, and escaped
//! string literals. Opcode dispatch and object construction live above it.
//!
//! # Crate Structure
//!
//! - [`codec`]: Stream reader and primitive encoders/decoders
//!
//! With the `cli` feature this package also builds the `pickleprims` binary,
//! which decodes and encodes individual primitives from the shell.

/// Re-export codec types.
pub mod codec {
    pub use pickleprims_codec::*;
}
