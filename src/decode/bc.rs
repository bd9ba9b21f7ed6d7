//! Block decompressors for the BC1 (DXT1), BC2 (DXT3), and BC3 (DXT5)
//! formats.
//!
//! Each format compresses a 4x4 pixel tile into a fixed-size block. The
//! per-block functions decode one block into 16 RGBA pixels in row-major
//! order; [`decode_blocks`] drives them over the whole block grid.

use crate::color::{lerp_rgb, lerp_rgba, B5G6R5};
use crate::util::div_ceil;

/// Decodes a row-major grid of `ceil(width/4) x ceil(height/4)` blocks into
/// an RGBA8888 `output` buffer of `width * height * 4` bytes.
///
/// Pixels of blocks that overhang the right/bottom image edge are discarded.
/// If `data` runs out mid-grid, the remaining blocks are abandoned and their
/// pixels keep whatever `output` already holds (transparent black for a
/// zero-initialized buffer). Truncated input is not an error.
pub(crate) fn decode_blocks<const BYTES_PER_BLOCK: usize>(
    data: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    decode_block: impl Fn([u8; BYTES_PER_BLOCK]) -> [[u8; 4]; 16],
) {
    let blocks_x = div_ceil(width, 4);
    let blocks_y = div_ceil(height, 4);

    let mut offset = 0_usize;
    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let Some(bytes) = data.get(offset..offset + BYTES_PER_BLOCK) else {
                return;
            };
            offset += BYTES_PER_BLOCK;

            let mut block = [0; BYTES_PER_BLOCK];
            block.copy_from_slice(bytes);
            let pixels = decode_block(block);

            for py in 0..4 {
                for px in 0..4 {
                    let x = bx * 4 + px;
                    let y = by * 4 + py;
                    if x < width && y < height {
                        let i = (y as usize * width as usize + x as usize) * 4;
                        output[i..i + 4].copy_from_slice(&pixels[(py * 4 + px) as usize]);
                    }
                }
            }
        }
    }
}

/// Decodes a BC1 block into 16 RGBA pixels.
///
/// Whether the block is an opaque 4-color block or a 3-color block with a
/// transparent fourth entry is selected by comparing the two raw packed
/// endpoint values, not their expanded colors.
pub(crate) fn bc1_block(block_bytes: [u8; 8]) -> [[u8; 4]; 16] {
    // https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc1
    let color0_u16 = u16::from_le_bytes([block_bytes[0], block_bytes[1]]);
    let color1_u16 = u16::from_le_bytes([block_bytes[2], block_bytes[3]]);

    let c0 = B5G6R5::from_u16(color0_u16).to_rgba8();
    let c1 = B5G6R5::from_u16(color1_u16).to_rgba8();

    let (c2, c3) = if color0_u16 > color1_u16 {
        (lerp_rgba(c0, c1, 1, 3), lerp_rgba(c0, c1, 2, 3))
    } else {
        (
            lerp_rgba(c0, c1, 1, 2),
            [0, 0, 0, 0], // transparent
        )
    };

    let lut = [c0, c1, c2, c3];
    fill_from_color_indexes(&lut, &block_bytes)
}

/// Decodes a BC2 block into 16 RGBA pixels.
///
/// The color half is always decoded in opaque 4-color mode; the alpha of each
/// pixel comes from its explicit 4-bit alpha value instead.
pub(crate) fn bc2_block(block_bytes: [u8; 16]) -> [[u8; 4]; 16] {
    // https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2
    let (alpha_bytes, color_bytes) = split_16(block_bytes);
    let mut pixels = opaque_color_half(color_bytes);

    // Two 4-bit alpha values per byte, low nibble first. 0..15 maps to 0..255.
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let byte = alpha_bytes[i / 2];
        let nibble = if i % 2 == 0 { byte & 0xF } else { byte >> 4 };
        pixel[3] = nibble * 17;
    }

    pixels
}

/// Decodes a BC3 block into 16 RGBA pixels.
///
/// The color half is always decoded in opaque 4-color mode; the alpha of each
/// pixel comes from an 8-entry interpolated alpha palette instead.
pub(crate) fn bc3_block(block_bytes: [u8; 16]) -> [[u8; 4]; 16] {
    // https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3
    let (alpha_bytes, color_bytes) = split_16(block_bytes);
    let mut pixels = opaque_color_half(color_bytes);

    let alpha_lut = alpha_palette(alpha_bytes[0], alpha_bytes[1]);

    // 16 3-bit palette indexes packed into 6 bytes, little-endian.
    let mut indexes = 0_u64;
    for (i, &byte) in alpha_bytes[2..8].iter().enumerate() {
        indexes |= (byte as u64) << (i * 8);
    }

    for (i, pixel) in pixels.iter_mut().enumerate() {
        let index = (indexes >> (i * 3)) & 0b111;
        pixel[3] = alpha_lut[index as usize];
    }

    pixels
}

/// The 8-entry BC3 alpha palette for the endpoints `a0` and `a1`.
///
/// `a0 > a1` selects the 8-value interpolated mode; otherwise 6 values are
/// interpolated and the last two entries are pinned to 0 and 255.
fn alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let mut lut = [a0, a1, 0, 0, 0, 0, 0, 0];
    let (a0, a1) = (a0 as u32, a1 as u32);
    if a0 > a1 {
        for i in 0..6 {
            lut[i as usize + 2] = (((6 - i) * a0 + (i + 1) * a1) / 7) as u8;
        }
    } else {
        for i in 0..4 {
            lut[i as usize + 2] = (((4 - i) * a0 + (i + 1) * a1) / 5) as u8;
        }
        lut[6] = 0;
        lut[7] = 255;
    }
    lut
}

/// Decodes the shared BC1-style color half of a BC2/BC3 block.
///
/// Unlike a standalone BC1 block, the 4-color opaque palette is used even
/// when `c0 <= c1`. Alpha is left at 255 for the caller to overwrite.
fn opaque_color_half(color_bytes: [u8; 8]) -> [[u8; 4]; 16] {
    let color0_u16 = u16::from_le_bytes([color_bytes[0], color_bytes[1]]);
    let color1_u16 = u16::from_le_bytes([color_bytes[2], color_bytes[3]]);

    let c0 = B5G6R5::from_u16(color0_u16).to_rgb8();
    let c1 = B5G6R5::from_u16(color1_u16).to_rgb8();
    let c2 = lerp_rgb(c0, c1, 1, 3);
    let c3 = lerp_rgb(c0, c1, 2, 3);

    let lut = [c0, c1, c2, c3].map(|[r, g, b]| [r, g, b, 255]);
    fill_from_color_indexes(&lut, &color_bytes)
}

/// Distributes a 4-entry color palette over 16 pixels according to the 2-bit
/// indexes in the last 4 bytes of a BC1-style color block.
fn fill_from_color_indexes(lut: &[[u8; 4]; 4], color_bytes: &[u8; 8]) -> [[u8; 4]; 16] {
    let indexes = u32::from_le_bytes([
        color_bytes[4],
        color_bytes[5],
        color_bytes[6],
        color_bytes[7],
    ]);

    let mut pixels: [[u8; 4]; 16] = Default::default();
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let index = (indexes >> (i * 2)) & 0b11;
        *pixel = lut[index as usize];
    }
    pixels
}

fn split_16(x: [u8; 16]) -> ([u8; 8], [u8; 8]) {
    let lower = [x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7]];
    let upper = [x[8], x[9], x[10], x[11], x[12], x[13], x[14], x[15]];
    (lower, upper)
}
