//! Statistics for compression operations

/// Statistics describing one compression operation
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Original size in bytes
    pub input_size: usize,
    /// Compressed container size in bytes
    pub output_size: usize,
    /// Compression ratio (output/input)
    pub compression_ratio: f64,
    /// Bits per symbol achieved, container overhead included
    pub bits_per_symbol: f64,
    /// Shannon entropy of the input in bits per symbol
    pub entropy: f64,
}

impl CompressionStats {
    /// Create statistics from sizes and a precomputed input entropy
    pub fn new(input_size: usize, output_size: usize, entropy: f64) -> Self {
        let compression_ratio = if input_size > 0 {
            output_size as f64 / input_size as f64
        } else {
            0.0
        };
        let bits_per_symbol = if input_size > 0 {
            (output_size * 8) as f64 / input_size as f64
        } else {
            0.0
        };
        Self {
            input_size,
            output_size,
            compression_ratio,
            bits_per_symbol,
            entropy,
        }
    }

    /// Measure a finished compression of `input` into `output`
    pub fn measure(input: &[u8], output: &[u8]) -> Self {
        Self::new(input.len(), output.len(), Self::calculate_entropy(input))
    }

    /// Space saved relative to the input, as a fraction in `[0, 1]`
    pub fn space_savings(&self) -> f64 {
        if self.compression_ratio < 1.0 {
            1.0 - self.compression_ratio
        } else {
            0.0
        }
    }

    /// Shannon entropy of a byte buffer in bits per symbol
    pub fn calculate_entropy(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        let len = data.len() as f64;
        let mut entropy = 0.0;
        for &count in &counts {
            if count > 0 {
                let p = count as f64 / len;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}
