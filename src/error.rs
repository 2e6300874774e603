//! Error handling for the huffzip library
//!
//! All failures are reported through [`HuffzipError`]; nothing in the library
//! panics on malformed input or exits the process. The caller decides what a
//! failure means for the program.

use thiserror::Error;

/// Main error type for the huffzip library
#[derive(Error, Debug)]
pub enum HuffzipError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to compress
    #[error("empty input: nothing to compress")]
    EmptyInput,

    /// Container header or table truncated or inconsistent
    #[error("malformed container: {message}")]
    MalformedContainer {
        /// Description of what failed to parse
        message: String,
    },

    /// Decoded symbol count disagrees with the declared original size
    #[error("size mismatch: decoded {decoded} bytes, container declares {declared}")]
    SizeMismatch {
        /// Number of bytes actually decoded
        decoded: u64,
        /// Original size declared in the container header
        declared: u64,
    },

    /// Input the codec cannot represent
    #[error("not supported: {feature}")]
    NotSupported {
        /// Description of the unsupported input
        feature: String,
    },
}

impl HuffzipError {
    /// Create a malformed container error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedContainer {
            message: message.into(),
        }
    }

    /// Create a size mismatch error
    pub fn size_mismatch(decoded: u64, declared: u64) -> Self {
        Self::SizeMismatch { decoded, declared }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(feature: S) -> Self {
        Self::NotSupported {
            feature: feature.into(),
        }
    }

    /// Create an I/O error from a message
    pub fn io_error<S: Into<String>>(message: S) -> Self {
        Self::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            message.into(),
        ))
    }

    /// Check if this is a recoverable error
    ///
    /// I/O failures may succeed on retry; a malformed or truncated container
    /// never will.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::EmptyInput => false,
            Self::MalformedContainer { .. } => false,
            Self::SizeMismatch { .. } => false,
            Self::NotSupported { .. } => false,
        }
    }

    /// Get the error category for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::EmptyInput => "input",
            Self::MalformedContainer { .. } => "container",
            Self::SizeMismatch { .. } => "size",
            Self::NotSupported { .. } => "unsupported",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HuffzipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HuffzipError::malformed("truncated table");
        assert_eq!(err.category(), "container");
        assert!(!err.is_recoverable());

        let err = HuffzipError::size_mismatch(3, 10);
        assert_eq!(err.category(), "size");
        assert_eq!(
            err.to_string(),
            "size mismatch: decoded 3 bytes, container declares 10"
        );
    }

    #[test]
    fn test_error_categories() {
        let io_err = HuffzipError::io_error("cannot open file");
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        assert_eq!(HuffzipError::EmptyInput.category(), "input");
        assert!(!HuffzipError::EmptyInput.is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HuffzipError = inner.into();
        assert_eq!(err.category(), "io");
    }
}
