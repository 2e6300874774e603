//! Self-describing container format
//!
//! Layout, all integers little-endian, unsigned:
//!
//! | Offset | Size      | Field                                        |
//! |--------|-----------|----------------------------------------------|
//! | 0      | 8         | original byte count                          |
//! | 8      | 2         | table entry count N                          |
//! | 10     | N x 5     | N entries of (1-byte symbol, 4-byte frequency) |
//! | 10+5N  | remainder | packed payload bits, MSB-first, zero-padded  |
//!
//! Table entries are written in ascending symbol order, so serializing and
//! re-parsing a frequency table yields the identical mapping regardless of
//! how it was originally populated.

use crate::error::{HuffzipError, Result};
use std::collections::BTreeMap;

/// Fixed header length in bytes (original size + entry count)
pub const HEADER_LEN: usize = 10;

/// Length of one (symbol, frequency) table entry in bytes
pub const ENTRY_LEN: usize = 5;

/// Parsed view of a container, borrowing the payload from the input buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedContainer<'a> {
    /// Byte count of the original, uncompressed data
    pub original_len: u64,
    /// Symbol frequency table, keyed by symbol in ascending order
    pub frequencies: BTreeMap<u8, u32>,
    /// Packed payload bits, MSB-first, zero-padded to a byte boundary
    pub payload: &'a [u8],
}

/// Serialize a container from its three sections
pub fn emit(original_len: u64, frequencies: &BTreeMap<u8, u32>, payload: &[u8]) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(HEADER_LEN + frequencies.len() * ENTRY_LEN + payload.len());
    out.extend_from_slice(&original_len.to_le_bytes());
    // At most 256 distinct byte values, so the count always fits u16
    out.extend_from_slice(&(frequencies.len() as u16).to_le_bytes());
    for (&symbol, &frequency) in frequencies {
        out.push(symbol);
        out.extend_from_slice(&frequency.to_le_bytes());
    }
    out.extend_from_slice(payload);
    out
}

/// Parse and validate a container
///
/// Rejects anything a well-formed compressor cannot have produced: a buffer
/// shorter than the header, a truncated table, more than 256 entries,
/// duplicate symbols, zero frequencies, a zero declared size, or a frequency
/// sum that disagrees with the declared size.
pub fn parse(data: &[u8]) -> Result<ParsedContainer<'_>> {
    if data.len() < HEADER_LEN {
        return Err(HuffzipError::malformed(format!(
            "container is {} bytes, shorter than the {HEADER_LEN}-byte header",
            data.len()
        )));
    }

    let mut size_bytes = [0u8; 8];
    size_bytes.copy_from_slice(&data[0..8]);
    let original_len = u64::from_le_bytes(size_bytes);
    let entry_count = u16::from_le_bytes([data[8], data[9]]) as usize;

    if original_len == 0 {
        return Err(HuffzipError::malformed(
            "container declares a zero original size",
        ));
    }
    if entry_count > 256 {
        return Err(HuffzipError::malformed(format!(
            "table declares {entry_count} entries, more than 256 possible symbols"
        )));
    }

    let table_end = HEADER_LEN + entry_count * ENTRY_LEN;
    if data.len() < table_end {
        return Err(HuffzipError::malformed("truncated symbol table"));
    }

    let mut frequencies = BTreeMap::new();
    for entry in 0..entry_count {
        let offset = HEADER_LEN + entry * ENTRY_LEN;
        let symbol = data[offset];
        let frequency = u32::from_le_bytes([
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
            data[offset + 4],
        ]);
        if frequency == 0 {
            return Err(HuffzipError::malformed(format!(
                "zero frequency recorded for symbol 0x{symbol:02x}"
            )));
        }
        if frequencies.insert(symbol, frequency).is_some() {
            return Err(HuffzipError::malformed(format!(
                "symbol 0x{symbol:02x} appears twice in the table"
            )));
        }
    }

    let total: u64 = frequencies.values().map(|&f| f as u64).sum();
    if total != original_len {
        return Err(HuffzipError::malformed(format!(
            "frequency sum {total} disagrees with declared size {original_len}"
        )));
    }

    Ok(ParsedContainer {
        original_len,
        frequencies,
        payload: &data[table_end..],
    })
}
