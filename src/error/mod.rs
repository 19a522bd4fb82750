//! Error types for peaks-strings
//!
//! Every fallible operation in the crate returns [`PeaksError`]. Failures are
//! local to the call: no operation returns a partial result.

use thiserror::Error;

/// Main error type for peaks-strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeaksError {
    // Codec errors

    /// A hex scan found no hexadecimal digit anywhere in the input
    #[error("No hexadecimal digits found")]
    Decode,

    /// Decoded bytes are not valid UTF-8 text
    #[error("UTF-8 error: {0}")]
    Encoding(String),

    /// Input is not valid standard base64
    #[error("Invalid base64: {0}")]
    Base64(String),

    // Range errors

    /// A character offset lies outside the string
    #[error("Character index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Range start lies after range end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    // Path errors

    /// The extension cannot be appended to the path
    #[error("Cannot append path extension: {0}")]
    InvalidPathExtension(String),
}

/// Type alias for Results using PeaksError
pub type Result<T> = std::result::Result<T, PeaksError>;

impl PeaksError {
    /// Create an encoding error with a message
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::Encoding(msg.into())
    }

    /// Check if this error is an input decoding failure (hex or base64)
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode | Self::Base64(_))
    }

    /// Check if this error is a UTF-8 conversion failure
    pub const fn is_encoding_error(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Check if this error is a character offset or range failure
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRange { .. })
    }
}

impl From<std::string::FromUtf8Error> for PeaksError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Encoding(error.to_string())
    }
}

impl From<base64::DecodeError> for PeaksError {
    fn from(error: base64::DecodeError) -> Self {
        Self::Base64(error.to_string())
    }
}
