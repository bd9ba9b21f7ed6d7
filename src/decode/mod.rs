//! Decoding of the pixel data section into RGBA8888.

mod bc;
mod uncompressed;

use crate::header::{FourCC, Header, PixelFormatFlags};
use crate::{DecodeError, Image, UnsupportedFormatError};

/// Decodes the pixel data of the top-level image described by `header`.
///
/// `data` is the payload starting at [`Header::DATA_OFFSET`]. The pixel
/// format flags select the decoder: a four-character code dispatches to one
/// of the block decompressors, the RGB flag to the bit-mask decoder. Anything
/// else is unsupported.
pub(crate) fn decode_pixels(header: &Header, data: &[u8]) -> Result<Image, DecodeError> {
    let width = header.width;
    let height = header.height;
    let pixel_format = &header.pixel_format;

    // Decoders stop early on truncated input, leaving the rest of the
    // buffer as transparent black.
    let mut output = vec![0; width as usize * height as usize * 4];

    if let Some(four_cc) = pixel_format.four_cc {
        match four_cc {
            FourCC::DXT1 => bc::decode_blocks::<8>(data, width, height, &mut output, bc::bc1_block),
            FourCC::DXT3 => {
                bc::decode_blocks::<16>(data, width, height, &mut output, bc::bc2_block)
            }
            FourCC::DXT5 => {
                bc::decode_blocks::<16>(data, width, height, &mut output, bc::bc3_block)
            }
            _ => return Err(UnsupportedFormatError::FourCC(four_cc).into()),
        }
    } else if pixel_format.flags.contains(PixelFormatFlags::RGB) {
        uncompressed::decode_pixels(data, width, height, pixel_format, &mut output)?;
    } else {
        return Err(UnsupportedFormatError::PixelFormatFlags(pixel_format.flags).into());
    }

    Ok(Image {
        width,
        height,
        data: output,
    })
}
