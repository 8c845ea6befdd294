//! TXB header structures.

use std::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// TXB file header.
///
/// TXB files carry no magic bytes. The header occupies the first 128 bytes
/// of the file and the mipmap payload starts immediately after it. All
/// integers are little-endian.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct TxbHeader {
    /// Declared size in bytes of the mipmap payload.
    pub data_size: u32,
    /// Unknown, looks like a float.
    pub unknown0: [u8; 4],
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Pixel data encoding byte.
    pub encoding: u8,
    /// Number of mipmap levels.
    pub mipmap_count: u8,
    /// Unknown (0x0101 on DXT-encoded files, 0x0100 on 0x09 files).
    pub unknown1: [u8; 2],
    /// Unknown, looks like a float.
    pub unknown2: [u8; 4],
    /// Reserved.
    pub reserved: [u8; 108],
}

impl TxbHeader {
    /// Total header size in bytes. The mipmap payload starts at this offset.
    pub const SIZE: usize = 128;
}

/// Pixel data encodings used by TXB files.
///
/// The encoding fixes the per-level size formulas: the full-resolution
/// level is [`base_mipmap_size`](Self::base_mipmap_size) bytes and no level
/// is smaller than [`min_data_size`](Self::min_data_size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw uncompressed BGRA, 4 bytes per pixel.
    Bgra,
    /// S3TC DXT1, 8 bytes per 4x4 block, no alpha.
    Dxt1,
    /// S3TC DXT5, 16 bytes per 4x4 block, interpolated alpha.
    Dxt5,
}

impl Encoding {
    /// Encoding byte for raw BGRA pixel data.
    pub const BGRA: u8 = 0x04;
    /// Encoding byte for DXT1-compressed pixel data.
    pub const DXT1: u8 = 0x0A;
    /// Encoding byte for DXT5-compressed pixel data.
    pub const DXT5: u8 = 0x0C;
    /// Encoding byte seen in shipped files whose pixel layout is unknown.
    /// Roughly 8 bits per pixel, but neither grayscale nor paletted.
    pub const RESERVED: u8 = 0x09;

    /// Map an encoding byte to its variant.
    ///
    /// Returns `None` for any byte that is not one of the three decodable
    /// encodings, including [`Encoding::RESERVED`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            Self::BGRA => Some(Self::Bgra),
            Self::DXT1 => Some(Self::Dxt1),
            Self::DXT5 => Some(Self::Dxt5),
            _ => None,
        }
    }

    /// The raw encoding byte for this variant.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Bgra => Self::BGRA,
            Self::Dxt1 => Self::DXT1,
            Self::Dxt5 => Self::DXT5,
        }
    }

    /// Whether the pixel data carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        match self {
            Self::Bgra | Self::Dxt5 => true,
            Self::Dxt1 => false,
        }
    }

    /// Whether the pixel data is block-compressed.
    pub const fn is_compressed(self) -> bool {
        match self {
            Self::Bgra => false,
            Self::Dxt1 | Self::Dxt5 => true,
        }
    }

    /// The pixel format handed to the texture upload layer.
    pub const fn pixel_format(self) -> PixelFormat {
        match self {
            Self::Bgra => PixelFormat::Bgra8,
            Self::Dxt1 => PixelFormat::Dxt1,
            Self::Dxt5 => PixelFormat::Dxt5,
        }
    }

    /// Smallest valid byte size of a single mipmap level.
    pub const fn min_data_size(self) -> u32 {
        match self {
            Self::Bgra => 4,
            Self::Dxt1 => 8,
            Self::Dxt5 => 16,
        }
    }

    /// Byte size of the full-resolution level for the given dimensions.
    pub const fn base_mipmap_size(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Bgra => width * height * 4,
            Self::Dxt1 => width * height / 2,
            Self::Dxt5 => width * height,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bgra => "BGRA",
            Self::Dxt1 => "DXT1",
            Self::Dxt5 => "DXT5",
        };
        f.write_str(name)
    }
}

/// Pixel format tag for the texture upload layer.
///
/// Compressed formats are handed over as-is; this crate never decompresses
/// pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel BGRA.
    Bgra8,
    /// S3TC DXT1 (BC1) blocks.
    Dxt1,
    /// S3TC DXT5 (BC3) blocks.
    Dxt5,
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bgra8 => "BGRA8",
            Self::Dxt1 => "DXT1",
            Self::Dxt5 => "DXT5",
        };
        f.write_str(name)
    }
}
