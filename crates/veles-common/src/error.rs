//! Error types for veles-common.

use thiserror::Error;

/// Common error type for Veles binary parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Seek target past the end of the buffer.
    #[error("seek out of range: position {position} in a buffer of {len} bytes")]
    SeekOutOfRange { position: usize, len: usize },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
