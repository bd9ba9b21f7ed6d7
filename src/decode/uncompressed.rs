//! Decoder for uncompressed RGB/RGBA pixel layouts.
//!
//! The header does not name a fixed format; instead each channel is described
//! by a bit mask within a 1, 2, 3, or 4 byte little-endian pixel. Channels
//! are extracted by deriving a shift and scale from each mask.

use crate::header::PixelFormat;
use crate::UnsupportedFormatError;

/// A channel bit mask together with its derived shift and scale.
///
/// `shift` is the index of the lowest set bit and `scale` maps the extracted
/// value to 0..=255 based on the run of contiguous set bits starting at
/// `shift`. A zero mask extracts 0 for every pixel.
#[derive(Debug, Clone, Copy)]
struct ChannelMask {
    mask: u32,
    shift: u32,
    scale: u32,
}

impl ChannelMask {
    fn new(mask: u32) -> Self {
        if mask == 0 {
            return Self {
                mask: 0,
                shift: 0,
                scale: 0,
            };
        }

        let shift = mask.trailing_zeros();
        let bits = (mask >> shift).trailing_ones();
        // u64 to survive bits == 32
        let scale = (255 / ((1_u64 << bits) - 1)) as u32;

        Self { mask, shift, scale }
    }

    fn is_zero(self) -> bool {
        self.mask == 0
    }

    fn extract(self, pixel: u32) -> u8 {
        // u64: a non-contiguous mask can leave high bits above the scaled run
        let value = (((pixel & self.mask) >> self.shift) as u64) * self.scale as u64;
        value.min(255) as u8
    }
}

/// Decodes `width * height` mask-described pixels into an RGBA8888 `output`
/// buffer, row-major.
///
/// A zero alpha mask means the format carries no alpha and every pixel is
/// fully opaque. If `data` runs out, the remaining pixels keep whatever
/// `output` already holds; truncated input is not an error.
pub(crate) fn decode_pixels(
    data: &[u8],
    width: u32,
    height: u32,
    pixel_format: &PixelFormat,
    output: &mut [u8],
) -> Result<(), UnsupportedFormatError> {
    let bytes_per_pixel = match pixel_format.rgb_bit_count {
        8 => 1_usize,
        16 => 2,
        24 => 3,
        32 => 4,
        count => return Err(UnsupportedFormatError::RgbBitCount(count)),
    };

    let r = ChannelMask::new(pixel_format.r_bit_mask);
    let g = ChannelMask::new(pixel_format.g_bit_mask);
    let b = ChannelMask::new(pixel_format.b_bit_mask);
    let a = ChannelMask::new(pixel_format.a_bit_mask);

    let mut offset = 0_usize;
    for y in 0..height {
        for x in 0..width {
            let Some(bytes) = data.get(offset..offset + bytes_per_pixel) else {
                return Ok(());
            };
            offset += bytes_per_pixel;

            let mut le = [0; 4];
            le[..bytes_per_pixel].copy_from_slice(bytes);
            let pixel = u32::from_le_bytes(le);

            let i = (y as usize * width as usize + x as usize) * 4;
            output[i] = r.extract(pixel);
            output[i + 1] = g.extract(pixel);
            output[i + 2] = b.extract(pixel);
            output[i + 3] = if a.is_zero() { 255 } else { a.extract(pixel) };
        }
    }

    Ok(())
}
