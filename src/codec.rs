//! Compress/decompress pipeline
//!
//! Pure transformations over in-memory buffers: the whole input is counted,
//! coded, and packed in one pass, and decompression rebuilds the identical
//! tree from the serialized frequency table. File handling lives in
//! [`crate::io`].

use crate::bits::{pack_bits, BitReader};
use crate::container;
use crate::error::{HuffzipError, Result};
use crate::huffman::{count_frequencies, HuffmanTree};

/// Compress a byte buffer into a self-describing container
///
/// Empty input is an error: there is nothing to build a code from, and no
/// empty-container encoding is defined.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(HuffzipError::EmptyInput);
    }

    let frequencies = count_frequencies(data)?;
    let tree = HuffmanTree::from_frequencies(&frequencies)?;

    let mut bits = Vec::new();
    for &symbol in data {
        // The table was counted from this same data, so every byte has a code
        let code = tree.get_code(symbol).unwrap();
        bits.extend_from_slice(code);
    }

    let payload = pack_bits(&bits);
    Ok(container::emit(data.len() as u64, &frequencies, &payload))
}

/// Decompress a container back into the original bytes
///
/// The tree is rebuilt from the serialized frequency table with the same
/// deterministic construction used at compression time, so the leaf codes
/// match without the code table ever being stored. Decoding stops once the
/// declared original count has been emitted; trailing bits are padding and
/// are discarded rather than decoded.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let parsed = container::parse(data)?;
    let tree = HuffmanTree::from_frequencies(&parsed.frequencies)?;

    // parse() guarantees a non-empty table for any nonzero declared size
    let mut walker = tree
        .walker()
        .ok_or_else(|| HuffzipError::malformed("container carries no symbol table"))?;

    let declared = parsed.original_len;
    // The declared size is attacker-controlled; a symbol consumes at least
    // one payload bit, so anything beyond that bound can never decode and
    // must not be reserved up front.
    let reservation = declared.min(parsed.payload.len() as u64 * 8);
    let mut out = Vec::with_capacity(reservation as usize);

    for bit in BitReader::new(parsed.payload) {
        if out.len() as u64 == declared {
            break;
        }
        if let Some(symbol) = walker.step(bit) {
            out.push(symbol);
        }
    }

    // A truncated or corrupted payload runs out of bits early
    if out.len() as u64 != declared {
        return Err(HuffzipError::size_mismatch(out.len() as u64, declared));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ENTRY_LEN, HEADER_LEN};
    use std::collections::BTreeMap;

    #[test]
    fn test_round_trip_basic() {
        let data = b"hello world! this is a test message for huffman coding.";
        let compressed = compress(data).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn test_round_trip_aaab() {
        // One-bit codes plus five padding bits; the padding must not decode
        // into spurious symbols
        let compressed = compress(b"aaab").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"aaab");
    }

    #[test]
    fn test_round_trip_single_symbol() {
        let data = vec![0x41u8; 1000];
        let compressed = compress(&data).unwrap();
        // Header + one table entry + 1000 bits of payload
        assert_eq!(compressed.len(), HEADER_LEN + ENTRY_LEN + 125);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_round_trip_all_distinct() {
        let data: Vec<u8> = (0..=255u8).collect();
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_round_trip_binary_data() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(compress(&[]), Err(HuffzipError::EmptyInput)));
    }

    #[test]
    fn test_truncated_payload_detected() {
        let data = b"the payload of this message is several bytes long";
        let compressed = compress(data).unwrap();
        let truncated = &compressed[..compressed.len() - 3];
        assert!(matches!(
            decompress(truncated),
            Err(HuffzipError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_huge_declared_size_rejected_without_allocating() {
        // A consistent table can still declare an absurd original size: 256
        // entries of u32::MAX sum to a 1 TiB claim in a ~1.3 KB container.
        // Decoding must fail cleanly instead of reserving that much memory.
        let frequencies: BTreeMap<u8, u32> = (0..=255u8).map(|s| (s, u32::MAX)).collect();
        let declared: u64 = frequencies.values().map(|&f| f as u64).sum();
        let crafted = crate::container::emit(declared, &frequencies, &[0u8; 4]);

        assert!(matches!(
            decompress(&crafted),
            Err(HuffzipError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_skewed_distribution() {
        let mut data = vec![b'a'; 10_000];
        data.extend_from_slice(b"bcdefghij");
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
    }
}
