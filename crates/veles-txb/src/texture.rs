//! TXB texture parsing.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use veles_common::BinaryReader;

use crate::header::{Encoding, PixelFormat, TxbHeader};
use crate::mipmap::{derive_mip_chain, MipMap};
use crate::{Error, Result};

/// A parsed TXB texture.
///
/// Holds the mipmap chain (index 0 is the full-resolution level, each
/// following level half the size per axis) and, when the file carries one,
/// the trailing TXI script.
#[derive(Debug, Clone)]
pub struct TxbTexture {
    encoding: Encoding,
    width: u16,
    height: u16,
    mipmaps: Vec<MipMap>,
    txi_data: Option<Vec<u8>>,
}

impl TxbTexture {
    /// Read a TXB file from disk and parse it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse a TXB texture from bytes.
    ///
    /// The input must be the complete file: the 128-byte header, the mipmap
    /// payload, and the optional TXI tail. The payload region spans exactly
    /// `data_size` bytes from the header regardless of how much of it the
    /// mipmap chain uses; the TXI script is whatever follows that region.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let header: TxbHeader = reader.read_struct()?;

        let encoding = match Encoding::from_byte(header.encoding) {
            Some(encoding) => encoding,
            None if header.encoding == Encoding::RESERVED => {
                return Err(Error::ReservedEncoding(header.encoding));
            }
            None => {
                return Err(Error::UnknownEncoding {
                    encoding: header.encoding,
                    width: header.width,
                    height: header.height,
                    mipmap_count: header.mipmap_count,
                    data_size: header.data_size,
                });
            }
        };

        let chain = derive_mip_chain(
            encoding,
            header.width,
            header.height,
            header.mipmap_count,
            header.data_size,
        );

        let mut mipmaps = Vec::with_capacity(chain.len());
        for (level, desc) in chain.iter().enumerate() {
            let data = reader
                .read_bytes(desc.size)
                .map_err(|_| Error::Truncated {
                    mipmap: level,
                    needed: desc.size,
                    available: reader.remaining(),
                })?
                .to_vec();

            mipmaps.push(MipMap {
                width: desc.width,
                height: desc.height,
                size: desc.size,
                data,
            });
        }

        // Skip to the end of the declared payload region. The chain can
        // stop short of it, and some files pad it.
        reader.seek(TxbHeader::SIZE + header.data_size as usize)?;

        let remaining = reader.remaining();
        let txi_data = if remaining == 0 {
            None
        } else {
            Some(reader.read_bytes(remaining)?.to_vec())
        };

        Ok(Self {
            encoding,
            width: header.width,
            height: header.height,
            mipmaps,
            txi_data,
        })
    }

    /// Pixel data encoding of this texture.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Width of the full-resolution level in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the full-resolution level in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the pixel data carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.encoding.has_alpha()
    }

    /// Whether the pixel data is block-compressed.
    pub fn is_compressed(&self) -> bool {
        self.encoding.is_compressed()
    }

    /// The pixel format for the texture upload layer.
    pub fn pixel_format(&self) -> PixelFormat {
        self.encoding.pixel_format()
    }

    /// The mipmap chain, full-resolution level first.
    pub fn mipmaps(&self) -> &[MipMap] {
        &self.mipmaps
    }

    /// The raw TXI script bytes, if the file carries any.
    pub fn txi_data(&self) -> Option<&[u8]> {
        self.txi_data.as_deref()
    }

    /// The TXI script as text, if the file carries any.
    ///
    /// TXI scripts are plain ASCII in shipped games; stray bytes are
    /// replaced rather than failing the whole texture.
    pub fn txi_text(&self) -> Option<Cow<'_, str>> {
        self.txi_data.as_deref().map(String::from_utf8_lossy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an in-memory TXB file from its parts.
    fn build_txb(
        encoding: u8,
        width: u16,
        height: u16,
        mipmap_count: u8,
        data_size: u32,
        payload: &[u8],
        txi: &[u8],
    ) -> Vec<u8> {
        let mut file = Vec::with_capacity(TxbHeader::SIZE + payload.len() + txi.len());
        file.extend_from_slice(&data_size.to_le_bytes());
        file.extend_from_slice(&[0u8; 4]);
        file.extend_from_slice(&width.to_le_bytes());
        file.extend_from_slice(&height.to_le_bytes());
        file.push(encoding);
        file.push(mipmap_count);
        file.extend_from_slice(&[0u8; 2]);
        file.extend_from_slice(&[0u8; 4]);
        file.extend_from_slice(&[0u8; 108]);
        file.extend_from_slice(payload);
        file.extend_from_slice(txi);
        file
    }

    #[test]
    fn test_parse_bgra() {
        // 4x4 BGRA with three levels: 64 + 16 + 4 bytes.
        let payload: Vec<u8> = (0..84).map(|i| i as u8).collect();
        let file = build_txb(Encoding::BGRA, 4, 4, 3, 84, &payload, b"");

        let texture = TxbTexture::parse(&file).unwrap();

        assert_eq!(texture.encoding(), Encoding::Bgra);
        assert_eq!(texture.width(), 4);
        assert_eq!(texture.height(), 4);
        assert!(texture.has_alpha());
        assert!(!texture.is_compressed());
        assert_eq!(texture.pixel_format(), PixelFormat::Bgra8);

        let mipmaps = texture.mipmaps();
        assert_eq!(mipmaps.len(), 3);
        assert_eq!((mipmaps[0].width, mipmaps[0].height), (4, 4));
        assert_eq!((mipmaps[1].width, mipmaps[1].height), (2, 2));
        assert_eq!((mipmaps[2].width, mipmaps[2].height), (1, 1));
        assert_eq!(mipmaps[0].data, payload[..64]);
        assert_eq!(mipmaps[1].data, payload[64..80]);
        assert_eq!(mipmaps[2].data, payload[80..84]);

        // The payload covered the declared region exactly, so there is no
        // TXI tail.
        assert!(texture.txi_data().is_none());
        assert!(texture.txi_text().is_none());
    }

    #[test]
    fn test_parse_dxt5_with_txi() {
        // 8x8 DXT5: 64 bytes for the base level, 16 for the 4x4 level.
        let payload = [0xABu8; 80];
        let txi = b"blending additive\r\n";
        let file = build_txb(Encoding::DXT5, 8, 8, 2, 80, &payload, txi);

        let texture = TxbTexture::parse(&file).unwrap();

        assert_eq!(texture.encoding(), Encoding::Dxt5);
        assert_eq!(texture.mipmaps().len(), 2);
        assert_eq!(texture.mipmaps()[0].size, 64);
        assert_eq!(texture.mipmaps()[1].size, 16);

        assert_eq!(texture.txi_data(), Some(&txi[..]));
        assert_eq!(texture.txi_text().unwrap(), "blending additive\r\n");
    }

    #[test]
    fn test_txi_after_padded_payload_region() {
        // The declared payload region is larger than what the single level
        // uses; the TXI script still starts after the full region.
        let mut payload = vec![0u8; 200];
        payload[..128].fill(0x11);
        let file = build_txb(Encoding::DXT1, 16, 16, 1, 200, &payload, b"mipmap 0");

        let texture = TxbTexture::parse(&file).unwrap();

        assert_eq!(texture.mipmaps().len(), 1);
        assert_eq!(texture.mipmaps()[0].size, 128);
        assert_eq!(texture.txi_data(), Some(&b"mipmap 0"[..]));
    }

    #[test]
    fn test_short_chain_for_non_square_texture() {
        // 8x4 DXT1: the 4x2 level is dropped, leaving a single level.
        let payload = [0u8; 16];
        let file = build_txb(Encoding::DXT1, 8, 4, 4, 16, &payload, b"");

        let texture = TxbTexture::parse(&file).unwrap();

        assert_eq!(texture.mipmaps().len(), 1);
        assert_eq!((texture.mipmaps()[0].width, texture.mipmaps()[0].height), (8, 4));
    }

    #[test]
    fn test_tiny_budget_yields_no_mipmaps() {
        // A declared payload smaller than the base level produces an empty
        // chain; the file still parses and the tail is the TXI script.
        let file = build_txb(Encoding::DXT1, 16, 16, 4, 10, &[0u8; 10], b"proceduretype cycle");

        let texture = TxbTexture::parse(&file).unwrap();

        assert!(texture.mipmaps().is_empty());
        assert_eq!(texture.width(), 16);
        assert_eq!(texture.txi_text().unwrap(), "proceduretype cycle");
    }

    #[test]
    fn test_truncated_payload() {
        // Header declares 128 payload bytes but only 40 are present.
        let file = build_txb(Encoding::DXT1, 16, 16, 1, 128, &[0u8; 40], b"");

        match TxbTexture::parse(&file) {
            Err(Error::Truncated {
                mipmap,
                needed,
                available,
            }) => {
                assert_eq!(mipmap, 0);
                assert_eq!(needed, 128);
                assert_eq!(available, 40);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_header() {
        let result = TxbTexture::parse(&[0u8; 64]);
        assert!(matches!(result, Err(Error::Common(_))));
    }

    #[test]
    fn test_declared_payload_past_end_of_file() {
        // All mipmap data is present but the declared region extends past
        // the end of the file, so the TXI seek fails.
        let file = build_txb(Encoding::DXT1, 16, 16, 1, 1000, &[0u8; 128], b"");

        let result = TxbTexture::parse(&file);
        assert!(matches!(
            result,
            Err(Error::Common(veles_common::Error::SeekOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_reserved_encoding() {
        let file = build_txb(Encoding::RESERVED, 32, 32, 1, 1024, &[0u8; 1024], b"");

        match TxbTexture::parse(&file) {
            Err(Error::ReservedEncoding(byte)) => assert_eq!(byte, 0x09),
            other => panic!("expected ReservedEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_encoding_carries_header_fields() {
        let file = build_txb(0xFF, 64, 32, 5, 4096, &[], b"");

        match TxbTexture::parse(&file) {
            Err(Error::UnknownEncoding {
                encoding,
                width,
                height,
                mipmap_count,
                data_size,
            }) => {
                assert_eq!(encoding, 0xFF);
                assert_eq!(width, 64);
                assert_eq!(height, 32);
                assert_eq!(mipmap_count, 5);
                assert_eq!(data_size, 4096);
            }
            other => panic!("expected UnknownEncoding, got {:?}", other),
        }
    }
}
