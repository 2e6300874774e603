//! MSB-first bit packing and unpacking
//!
//! The container payload packs code bits most-significant-bit-first within
//! each byte, with the final byte zero-padded on the right when the total bit
//! count is not a multiple of 8.

/// Pack a bit sequence into bytes, MSB-first, zero-padding the final byte
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    let mut current = 0u8;
    let mut filled = 0u32;

    for &bit in bits {
        current = (current << 1) | u8::from(bit);
        filled += 1;
        if filled == 8 {
            bytes.push(current);
            current = 0;
            filled = 0;
        }
    }

    if filled > 0 {
        bytes.push(current << (8 - filled));
    }
    bytes
}

/// MSB-first bit iterator over a byte slice
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bits not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.pos >= self.data.len() * 8 {
            return None;
        }
        let byte = self.data[self.pos / 8];
        let bit = (byte >> (7 - self.pos % 8)) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }
}
