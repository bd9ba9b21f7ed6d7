//! Internal module for expanding and interpolating packed block colors.
//!
//! All arithmetic is integer arithmetic with truncating division. The exact
//! rounding matters: block decoding must be bit-identical across platforms.

/// A 16-bit packed RGB565 color as stored in BC1-3 color endpoints.
#[derive(Debug, Clone, Copy)]
pub(crate) struct B5G6R5 {
    pub r5: u16,
    pub g6: u16,
    pub b5: u16,
}

impl B5G6R5 {
    #[inline(always)]
    pub fn from_u16(u: u16) -> Self {
        Self {
            b5: u & 0x1F,
            g6: (u >> 5) & 0x3F,
            r5: (u >> 11) & 0x1F,
        }
    }

    /// Expands to 8 bits per channel with a fully opaque alpha.
    #[inline(always)]
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, 255]
    }

    #[inline(always)]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r5 as u32 * 255 / 31) as u8,
            (self.g6 as u32 * 255 / 63) as u8,
            (self.b5 as u32 * 255 / 31) as u8,
        ]
    }
}

/// The RGB8 color `num/den` of the way from `c0` to `c1`, channel-wise.
#[inline(always)]
pub(crate) fn lerp_rgb(c0: [u8; 3], c1: [u8; 3], num: u32, den: u32) -> [u8; 3] {
    let inv = den - num;
    let mix = |a: u8, b: u8| ((a as u32 * inv + b as u32 * num) / den) as u8;
    [
        mix(c0[0], c1[0]),
        mix(c0[1], c1[1]),
        mix(c0[2], c1[2]),
    ]
}

/// Like [`lerp_rgb`], but with the alpha channel forced to fully opaque.
#[inline(always)]
pub(crate) fn lerp_rgba(c0: [u8; 4], c1: [u8; 4], num: u32, den: u32) -> [u8; 4] {
    let [r, g, b] = lerp_rgb(
        [c0[0], c0[1], c0[2]],
        [c1[0], c1[1], c1[2]],
        num,
        den,
    );
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_565_primaries() {
        // 11111 000000 00000
        assert_eq!(B5G6R5::from_u16(0xF800).to_rgba8(), [255, 0, 0, 255]);
        // 00000 111111 00000
        assert_eq!(B5G6R5::from_u16(0x07E0).to_rgba8(), [0, 255, 0, 255]);
        // 00000 000000 11111
        assert_eq!(B5G6R5::from_u16(0x001F).to_rgba8(), [0, 0, 255, 255]);

        assert_eq!(B5G6R5::from_u16(0x0000).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(B5G6R5::from_u16(0xFFFF).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn expand_565_truncates() {
        // 1 * 255 / 31 == 8 (8.22...), 1 * 255 / 63 == 4 (4.04...)
        assert_eq!(B5G6R5::from_u16(0x0801).to_rgb8(), [8, 4, 8]);
        // 16 * 255 / 31 == 131 (131.6...), 32 * 255 / 63 == 129 (129.5...)
        assert_eq!(B5G6R5::from_u16(0x8410).to_rgb8(), [131, 129, 131]);
    }

    #[test]
    fn lerp_endpoints_and_thirds() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];
        assert_eq!(lerp_rgb(black, white, 0, 3), black);
        assert_eq!(lerp_rgb(black, white, 3, 3), white);
        // 255 / 3 == 85, 510 / 3 == 170
        assert_eq!(lerp_rgb(black, white, 1, 3), [85, 85, 85]);
        assert_eq!(lerp_rgb(black, white, 2, 3), [170, 170, 170]);
        // truncation: 255 / 2 == 127
        assert_eq!(lerp_rgb(black, white, 1, 2), [127, 127, 127]);
    }

    #[test]
    fn lerp_rgba_forces_opaque() {
        let a = [10, 20, 30, 0];
        let b = [40, 50, 60, 7];
        assert_eq!(lerp_rgba(a, b, 1, 3), [20, 30, 40, 255]);
    }
}
