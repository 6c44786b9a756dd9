//! The public writer: a deferred operation queue plus a fork/ldelim stack
//! for nested length-delimited messages.
//!
//! Every "write" method below queues an [`Op`] rather than touching bytes
//! directly; `finish` is the only place that allocates the output buffer
//! and walks the queue.

use crate::error::WriterError;
use crate::long_bits::LongBits;
use crate::op::Op;
use crate::varint;

/// Builds a Protocol-Buffers-compatible byte buffer from a sequence of
/// field writes.
///
/// A `Writer` is a sequential builder: it is not `Sync`, and nothing about
/// its API suggests it should be shared across threads. Reuse a single
/// instance across messages instead — `finish` resets it and keeps the
/// queue's allocated capacity.
#[derive(Debug, Default)]
pub struct Writer {
    ops: Vec<Op>,
    len: usize,
    fork_stack: Vec<(usize, usize)>,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            ops: Vec::new(),
            len: 0,
            fork_stack: Vec::new(),
        }
    }

    /// Pre-sizes the op queue for callers that know roughly how many
    /// fields they are about to write. This is the crate's entire
    /// configuration surface: a stateless wire encoder has no other
    /// runtime-tunable behavior.
    pub fn with_capacity(ops: usize) -> Self {
        Writer {
            ops: Vec::with_capacity(ops),
            len: 0,
            fork_stack: Vec::new(),
        }
    }

    /// Bytes the writer would produce if `finish`ed right now.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, op: Op) -> &mut Self {
        self.len += op.byte_len();
        self.ops.push(op);
        self
    }

    /// Writes a field tag: `(field_id << 3) | wire_type`. Routed through
    /// the same varint path as `uint32`, so multi-byte tags (large field
    /// ids) work without special-casing.
    pub fn tag(&mut self, field_id: u32, wire_type: u8) -> &mut Self {
        let tag = (field_id << 3) | (wire_type as u32 & 0x7);
        self.push(Op::Varint32(tag))
    }

    pub fn uint32(&mut self, value: u32) -> &mut Self {
        self.push(Op::Varint32(value))
    }

    /// Non-negative values take the `uint32` path; negative values are
    /// widened into a sign-extended 64-bit varint (10 bytes), per the wire
    /// format's handling of negative `int32`.
    pub fn int32(&mut self, value: i32) -> &mut Self {
        if value >= 0 {
            self.uint32(value as u32)
        } else {
            self.push(Op::Varint64(LongBits::from_i32(value)))
        }
    }

    pub fn sint32(&mut self, value: i32) -> &mut Self {
        self.uint32(varint::zigzag_encode32(value))
    }

    pub fn uint64(&mut self, value: u64) -> &mut Self {
        self.push(Op::Varint64(LongBits::from_u64(value)))
    }

    /// Identical to `uint64`: the two's-complement split already
    /// sign-extends a negative `value` to the full 64 bits.
    pub fn int64(&mut self, value: i64) -> &mut Self {
        self.push(Op::Varint64(LongBits::from_i64(value)))
    }

    pub fn sint64(&mut self, value: i64) -> &mut Self {
        let mut bits = LongBits::from_i64(value);
        bits.zigzag_encode();
        self.push(Op::Varint64(bits))
    }

    pub fn bool(&mut self, value: bool) -> &mut Self {
        self.push(Op::Byte(u8::from(value)))
    }

    pub fn fixed32(&mut self, value: u32) -> &mut Self {
        self.push(Op::Fixed32(value))
    }

    pub fn sfixed32(&mut self, value: i32) -> &mut Self {
        self.push(Op::Fixed32(value as u32))
    }

    pub fn fixed64(&mut self, value: u64) -> &mut Self {
        self.push(Op::Fixed64(LongBits::from_u64(value)))
    }

    pub fn sfixed64(&mut self, value: i64) -> &mut Self {
        self.push(Op::Fixed64(LongBits::from_i64(value)))
    }

    pub fn float(&mut self, value: f32) -> &mut Self {
        self.push(Op::Fixed32(value.to_bits()))
    }

    pub fn double(&mut self, value: f64) -> &mut Self {
        self.push(Op::Fixed64(LongBits::from_u64(value.to_bits())))
    }

    /// Length-prefixed raw bytes. Empty input still emits the length-zero
    /// varint byte, just with an empty payload op behind it.
    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.uint32(value.len() as u32);
        self.push(Op::Raw(value.into()))
    }

    /// Length-prefixed UTF-8 string. `&str` is already valid UTF-8, so this
    /// is a fast path — no code-unit scan, just the byte length already
    /// known from the string itself.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.uint32(value.len() as u32);
        self.push(Op::Raw(value.as_bytes().into()))
    }

    /// Begins a nested length-delimited message. Ops written after `fork`
    /// land in the same queue as everything before it; only the saved
    /// split index distinguishes "inner" from "outer" until `ldelim`.
    pub fn fork(&mut self) -> &mut Self {
        self.fork_stack.push((self.ops.len(), self.len));
        self
    }

    /// Discards everything written since the matching `fork` (or, with no
    /// fork pending, the entire writer).
    pub fn reset(&mut self) -> &mut Self {
        match self.fork_stack.pop() {
            Some((start_index, start_len)) => {
                self.ops.truncate(start_index);
                self.len = start_len;
            }
            None => {
                self.ops.clear();
                self.len = 0;
            }
        }
        self
    }

    /// Closes the innermost `fork`, prefixing the ops written since then
    /// with their length (and, if `field_id` is given, a length-delimited
    /// tag ahead of that).
    pub fn ldelim(&mut self, field_id: Option<u32>) -> Result<&mut Self, WriterError> {
        let (start_index, start_len) = self
            .fork_stack
            .pop()
            .ok_or(WriterError::UnbalancedFork)?;
        let inner_len = self.len - start_len;
        let inner_ops = self.ops.split_off(start_index);
        self.len = start_len;

        if let Some(id) = field_id {
            self.tag(id, 2);
        }
        self.uint32(inner_len as u32);

        self.ops.extend(inner_ops);
        self.len += inner_len;
        Ok(self)
    }

    /// Allocates a buffer of exactly `self.len()` bytes, writes every
    /// queued op into it in order, then resets the writer so it can
    /// immediately start building the next message.
    pub fn finish(&mut self) -> Vec<u8> {
        let mut buf = vec![0u8; self.len];
        let mut pos = 0;
        for op in &self.ops {
            let written = op.emit(&mut buf[pos..]);
            debug_assert_eq!(written, op.byte_len(), "op emitted a different length than it reported");
            pos += written;
        }
        debug_assert_eq!(pos, self.len, "walked queue length did not match accumulated len");

        self.ops.clear();
        self.len = 0;
        self.fork_stack.clear();
        buf
    }
}
