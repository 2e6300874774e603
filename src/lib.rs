//! # huffzip: Lossless Huffman File Compression
//!
//! This crate compresses arbitrary byte streams with canonical Huffman coding
//! and packs the result into a self-describing binary container: a fixed
//! header, the symbol frequency table, and the MSB-first packed bitstream.
//! Decompression rebuilds the identical Huffman tree from the serialized
//! table, so the code assignment round-trips without ever being stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffzip::{compress, decompress};
//!
//! let data = b"the quick brown fox jumps over the lazy dog";
//! let container = compress(data)?;
//! let restored = decompress(&container)?;
//! assert_eq!(restored, data);
//! # Ok::<(), huffzip::HuffzipError>(())
//! ```
//!
//! File-level helpers wrap the same pure pipeline:
//!
//! ```rust,no_run
//! let stats = huffzip::compress_file("notes.txt", "notes.hz")?;
//! println!("saved {:.1}%", stats.space_savings() * 100.0);
//! huffzip::decompress_file("notes.hz", "notes-restored.txt")?;
//! # Ok::<(), huffzip::HuffzipError>(())
//! ```

#![warn(missing_docs)]

pub mod bits;
pub mod codec;
pub mod container;
pub mod error;
pub mod huffman;
pub mod io;
pub mod stats;

pub use codec::{compress, decompress};
pub use error::{HuffzipError, Result};
pub use huffman::{count_frequencies, HuffmanTree};
pub use io::{compress_file, decompress_file, read_file, write_file};
pub use stats::CompressionStats;
