//! Error types for the Phantom Silhouette core.

use thiserror::Error;

/// Result type for core operations.
pub type PhantomResult<T> = Result<T, PhantomError>;

/// Errors that can occur while transforming voice parameters or transcoding
/// PCM audio.
#[derive(Debug, Error)]
pub enum PhantomError {
    /// A caller-supplied argument is outside the accepted domain.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// Error message.
        message: String,
    },

    /// PCM bit depth the decoder does not handle.
    #[error("unsupported PCM format: {bits} bits per sample")]
    UnsupportedFormat {
        /// Bits per sample found in the fmt chunk.
        bits: u16,
    },

    /// Structurally invalid WAV data.
    #[error("malformed WAV data: {0}")]
    MalformedWav(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PhantomError {
    /// Creates an invalid argument error.
    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }
}
