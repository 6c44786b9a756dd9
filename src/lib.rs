//! Protocol-Buffers-compatible wire format writer.
//!
//! This crate is the serialization core only: it has no `.proto` schema
//! parser, no reflective message-type machinery, and no matching decoder.
//! Those are external collaborators that drive a [`Writer`] field-by-field.
//! What's here produces byte-exact Protocol Buffers wire format from
//! primitive scalar, length-delimited, and nested-message writes, via a
//! deferred operation queue rather than an eagerly-appended byte buffer —
//! see [`Writer`] for why.

mod error;
mod fixed;
mod long_bits;
mod op;
#[cfg(test)]
mod utf8;
mod varint;
mod writer;

pub use error::WriterError;
pub use long_bits::LongBits;
pub use writer::Writer;
