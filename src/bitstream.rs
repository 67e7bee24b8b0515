//! Bit-level packing over a little-endian bit buffer.
//!
//! Bit `k` of a stream lives in byte `k / 8` at position `k % 8`, counted from
//! the least significant end. Integers are stored as their little-endian bytes
//! starting at whatever bit position the stream has reached, so fields are
//! never aligned to byte boundaries except at the very start.

use bitvec::prelude::*;

use crate::error::{HuffmanError, Result};

/// Owned bit sequence in stream order.
pub type Bits = BitVec<u8, Lsb0>;

/// Borrowed bit sequence in stream order.
pub type BitStr = BitSlice<u8, Lsb0>;

#[derive(Debug, Default)]
pub struct BitWriter {
    bits: Bits,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { bits: Bits::new() }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn append_bits(&mut self, bits: &BitStr) {
        self.bits.extend_from_bitslice(bits);
    }

    pub fn append_u8(&mut self, value: u8) {
        self.append_bits(value.view_bits::<Lsb0>());
    }

    pub fn append_i32(&mut self, value: i32) {
        self.append_bits(value.to_le_bytes().view_bits::<Lsb0>());
    }

    /// Finishes the stream, zero-padding the last byte.
    pub fn pack(mut self) -> Vec<u8> {
        let len = self.bits.len();
        let padded = len.div_ceil(8) * 8;
        self.bits.resize(padded, false);
        self.bits.into_vec()
    }
}

#[derive(Debug)]
pub struct BitReader {
    bits: Bits,
    position: usize,
}

impl BitReader {
    pub fn new(bytes: &[u8]) -> Self {
        BitReader {
            bits: Bits::from_slice(bytes),
            position: 0,
        }
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }

    /// Looks at the next `length` bits without consuming them.
    pub fn peek_bits(&self, length: usize) -> Result<&BitStr> {
        let remaining = self.remaining();
        if length > remaining {
            return Err(HuffmanError::Exhausted {
                requested: length,
                remaining,
            });
        }
        Ok(&self.bits[self.position..self.position + length])
    }

    pub fn take_bits(&mut self, length: usize) -> Result<&BitStr> {
        let start = self.position;
        self.peek_bits(length)?;
        self.position += length;
        Ok(&self.bits[start..self.position])
    }

    pub fn take_u8(&mut self) -> Result<u8> {
        let [byte] = self.take_bytes::<1>()?;
        Ok(byte)
    }

    pub fn take_i32(&mut self) -> Result<i32> {
        self.take_bytes::<4>().map(i32::from_le_bytes)
    }

    fn take_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        bytes
            .view_bits_mut::<Lsb0>()
            .copy_from_bitslice(self.take_bits(N * 8)?);
        Ok(bytes)
    }
}
