//! Mipmap levels and chain derivation.

use crate::header::Encoding;

/// A single mipmap level with its pixel data.
#[derive(Debug, Clone)]
pub struct MipMap {
    /// Level width in pixels, at least 1.
    pub width: u32,
    /// Level height in pixels, at least 1.
    pub height: u32,
    /// Byte size of the pixel data.
    pub size: usize,
    /// Raw pixel data, exactly `size` bytes.
    pub data: Vec<u8>,
}

/// Dimensions and byte size of a mipmap level before its data is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipMapDesc {
    /// Level width in pixels, at least 1.
    pub width: u32,
    /// Level height in pixels, at least 1.
    pub height: u32,
    /// Byte size of the level's pixel data.
    pub size: usize,
}

/// Derive the mipmap chain for a TXB image.
///
/// Walks from the full-resolution level down, halving the dimensions and
/// quartering the level size each step, and consuming each level's size
/// from the payload budget declared in the header. The chain ends early,
/// without error, when any of these hold:
///
/// - a level is smaller than the 4-pixel block granularity on one axis but
///   not square (the engine drops such levels silently),
/// - the next level no longer fits in the remaining payload budget,
/// - both dimensions have reached zero.
///
/// A chain shorter than `mipmap_count` is therefore normal, not corrupt.
pub fn derive_mip_chain(
    encoding: Encoding,
    width: u16,
    height: u16,
    mipmap_count: u8,
    data_size: u32,
) -> Vec<MipMapDesc> {
    let mut width = width as u32;
    let mut height = height as u32;
    let mut size = encoding.base_mipmap_size(width, height);
    let min_size = encoding.min_data_size();
    let mut remaining = data_size;

    let mut chain = Vec::with_capacity(mipmap_count as usize);

    for _ in 0..mipmap_count {
        let level_width = width.max(1);
        let level_height = height.max(1);

        if (width < 4 || height < 4) && width != height {
            break;
        }

        let level_size = size.max(min_size);

        if remaining < level_size {
            // Wouldn't fit in the declared payload.
            break;
        }
        remaining -= level_size;

        chain.push(MipMapDesc {
            width: level_width,
            height: level_height,
            size: level_size as usize,
        });

        width >>= 1;
        height >>= 1;
        size >>= 2;

        if width < 1 && height < 1 {
            break;
        }
    }

    chain
}
