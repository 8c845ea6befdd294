//! TXB texture file parsing for BioWare Aurora engine games.
//!
//! TXB is the Xbox-era texture container used alongside TGA and TPC in
//! Aurora engine titles. A file is a fixed 128-byte header, a mipmap
//! payload (full-resolution level first, each following level half the
//! size per axis), and an optional trailing TXI script with material
//! properties:
//!
//! | Offset            | Size | Field                        |
//! |-------------------|------|------------------------------|
//! | 0                 | 4    | payload size in bytes        |
//! | 4                 | 4    | unknown                      |
//! | 8                 | 2    | width                        |
//! | 10                | 2    | height                       |
//! | 12                | 1    | encoding byte                |
//! | 13                | 1    | mipmap count                 |
//! | 14                | 114  | unknown/reserved (to 128)    |
//! | 128               | var  | mipmap payload               |
//! | 128 + payload size| var  | TXI script (to end of file)  |
//!
//! Pixel data comes raw BGRA, DXT1 or DXT5 encoded. Nothing is
//! decompressed here; callers hand each [`MipMap`] to their texture upload
//! path along with the [`PixelFormat`].
//!
//! # Example
//!
//! ```no_run
//! use veles_txb::TxbTexture;
//!
//! let texture = TxbTexture::from_file("pnl_blueprint.txb")?;
//!
//! println!(
//!     "{}x{} {}, {} mipmaps",
//!     texture.width(),
//!     texture.height(),
//!     texture.encoding(),
//!     texture.mipmaps().len()
//! );
//!
//! if let Some(txi) = texture.txi_text() {
//!     println!("{}", txi);
//! }
//! # Ok::<(), veles_txb::Error>(())
//! ```

mod error;
mod header;
mod mipmap;
mod texture;

pub use error::{Error, Result};
pub use header::{Encoding, PixelFormat, TxbHeader};
pub use mipmap::{derive_mip_chain, MipMap, MipMapDesc};
pub use texture::TxbTexture;
