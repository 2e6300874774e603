//! File collaborators for the codec pipeline
//!
//! The codec itself only transforms buffers; these helpers read a whole file
//! into memory, run the pure transformation, and write the result. The
//! destination is only touched after the transformation has succeeded, so a
//! failed operation never leaves a corrupt file behind.

use crate::codec;
use crate::error::{HuffzipError, Result};
use crate::stats::CompressionStats;
use std::fs;
use std::path::Path;

/// Read the full content of a file
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path)
        .map_err(|e| HuffzipError::io_error(format!("cannot read {}: {e}", path.display())))
}

/// Write a buffer to a file, truncating any existing content
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, data)
        .map_err(|e| HuffzipError::io_error(format!("cannot write {}: {e}", path.display())))
}

/// Compress `input` into a container file at `output`
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<CompressionStats> {
    let data = read_file(input)?;
    let compressed = codec::compress(&data)?;
    write_file(output, &compressed)?;
    Ok(CompressionStats::measure(&data, &compressed))
}

/// Decompress a container file at `input` into `output`
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = read_file(input)?;
    let decompressed = codec::decompress(&data)?;
    write_file(output, &decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("does-not-exist")).unwrap_err();
        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_compress_decompress_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let packed = dir.path().join("source.hz");
        let restored = dir.path().join("restored.txt");

        let data = b"round trip through the filesystem";
        fs::write(&source, data).unwrap();

        let stats = compress_file(&source, &packed).unwrap();
        assert_eq!(stats.input_size, data.len());
        assert_eq!(stats.output_size, fs::read(&packed).unwrap().len());

        decompress_file(&packed, &restored).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_failed_compress_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("empty.txt");
        let packed = dir.path().join("empty.hz");
        fs::write(&source, b"").unwrap();

        assert!(compress_file(&source, &packed).is_err());
        assert!(!packed.exists());
    }
}
