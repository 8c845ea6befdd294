//! Error types for TXB parsing.

use thiserror::Error;

/// Errors that can occur when parsing TXB textures.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] veles_common::Error),

    /// A mipmap level's pixel data ends before its declared size.
    #[error("truncated pixel data in mipmap {mipmap}: needed {needed} bytes, {available} available")]
    Truncated {
        mipmap: usize,
        needed: usize,
        available: usize,
    },

    /// Encoding 0x09 appears in shipped files but its pixel layout is not
    /// understood, so such textures cannot be decoded.
    #[error("unsupported TXB encoding {0:#04x}")]
    ReservedEncoding(u8),

    /// Encoding byte matching no known TXB variant.
    #[error(
        "unknown TXB encoding {encoding:#04x} ({width}x{height}, {mipmap_count} mipmaps, {data_size} data bytes)"
    )]
    UnknownEncoding {
        encoding: u8,
        width: u16,
        height: u16,
        mipmap_count: u8,
        data_size: u32,
    },
}

/// Result type for TXB operations.
pub type Result<T> = std::result::Result<T, Error>;
