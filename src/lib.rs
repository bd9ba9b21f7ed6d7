//! Decoder for Joymax DDJ texture containers and the DDS images they wrap.
//!
//! DDJ files are DDS files prefixed with a 20-byte vendor header. The DDS
//! payloads found in the wild use the legacy DX9-style header and are either
//! BC1/BC2/BC3 (DXT1/DXT3/DXT5) block-compressed or uncompressed RGB/RGBA
//! with channel bit masks. This crate decodes exactly that subset into flat
//! RGBA8888 pixel buffers.
//!
//! Decoding is a pure function of the input bytes: no I/O, no state, and no
//! out-of-bounds reads no matter how malformed the input is. Pixel data that
//! is shorter than the header promises is not an error; the missing region
//! simply stays transparent black.
//!
//! ```no_run
//! let bytes: Vec<u8> = std::fs::read("example.ddj")?;
//! let image = ddj::decode(&bytes)?;
//! assert_eq!(image.data.len(), image.width as usize * image.height as usize * 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod color;
mod container;
mod decode;
mod error;
mod header;
mod util;

pub use container::*;
pub use error::*;
pub use header::*;

/// A decoded image: a flat, row-major RGBA8888 buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels, taken verbatim from the header.
    pub width: u32,
    /// Image height in pixels, taken verbatim from the header.
    pub height: u32,
    /// Exactly `width * height * 4` bytes, 4 bytes (R, G, B, A) per pixel,
    /// with no padding between rows.
    pub data: Vec<u8>,
}

/// Decodes a buffer holding either a DDJ container or a bare DDS file.
///
/// The DDJ magic is sniffed; if present, the container is unwrapped first.
pub fn decode(data: &[u8]) -> Result<Image, DecodeError> {
    if is_ddj(data) {
        decode_ddj(data)
    } else {
        decode_dds(data)
    }
}

/// Unwraps a DDJ container and decodes the DDS file inside it.
pub fn decode_ddj(data: &[u8]) -> Result<Image, DecodeError> {
    decode_dds(unwrap_ddj(data)?)
}

/// Decodes a bare DDS file into an RGBA8888 image.
///
/// Only the top-level image is decoded; mipmaps and any further surfaces are
/// ignored.
pub fn decode_dds(payload: &[u8]) -> Result<Image, DecodeError> {
    let header = Header::parse(payload)?;
    decode::decode_pixels(&header, &payload[Header::DATA_OFFSET..])
}
