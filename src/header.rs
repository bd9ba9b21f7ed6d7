use crate::util::u32_le_array;
use crate::FormatError;
use bitflags::bitflags;

/// The parsed DDS header.
///
/// Only the fields the decoder needs are retained; reserved words, pitch,
/// depth, and mipmap counts are skipped. The pixel data of the top-level
/// image always starts at byte [`Header::DATA_OFFSET`] of the payload,
/// regardless of what the file declares.
///
/// https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// Flags to indicate which members contain valid data.
    pub flags: DdsFlags,
    /// Surface height (in pixels).
    pub height: u32,
    /// Surface width (in pixels).
    pub width: u32,
    pub pixel_format: PixelFormat,
    /// Specifies the complexity of the surfaces stored.
    pub caps: DdsCaps,
}

impl Header {
    /// The declared size of the DDS header structure. Only this value is
    /// accepted in the header-size field.
    pub const SIZE: usize = 124;
    const INTS: usize = Self::SIZE / 4;

    /// The magic bytes (`'DDS '`) at the start of every DDS file.
    pub const MAGIC: [u8; 4] = *b"DDS ";

    /// Byte offset of the pixel data within the payload: 4 magic bytes plus
    /// the 124-byte header.
    pub const DATA_OFFSET: usize = 128;

    /// Parses the magic bytes and header from the start of a DDS payload.
    ///
    /// Fails if the payload is shorter than [`Header::DATA_OFFSET`] bytes, if
    /// the magic bytes are wrong, or if the declared header size is not 124.
    /// Everything else is read permissively; in particular, no check relates
    /// the declared dimensions to the number of pixel data bytes actually
    /// present.
    pub fn parse(payload: &[u8]) -> Result<Self, FormatError> {
        if payload.len() < Self::DATA_OFFSET {
            return Err(FormatError::TooSmall(payload.len()));
        }

        if payload[..4] != Self::MAGIC {
            let mut magic = [0; 4];
            magic.copy_from_slice(&payload[..4]);
            return Err(FormatError::InvalidMagicBytes(magic));
        }

        let buffer: [u32; Self::INTS] = u32_le_array(&payload[4..]);

        if buffer[0] != Self::SIZE as u32 {
            return Err(FormatError::InvalidHeaderSize(buffer[0]));
        }

        let flags = DdsFlags::from_bits_retain(buffer[1]);
        let height = buffer[2];
        let width = buffer[3];

        let pixel_format = PixelFormat::from_buffer([
            buffer[18], buffer[19], buffer[20], buffer[21], buffer[22], buffer[23], buffer[24],
            buffer[25],
        ]);

        let caps = DdsCaps::from_bits_retain(buffer[26]);

        Ok(Self {
            flags,
            height,
            width,
            pixel_format,
            caps,
        })
    }
}

/// The DDS_PIXELFORMAT structure describing the pixel layout of the surface.
///
/// https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-pixelformat
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Values which indicate what type of data is in the surface.
    pub flags: PixelFormatFlags,
    /// Four-character code identifying a compressed format.
    ///
    /// This is `None` if `flags` does not contain [`PixelFormatFlags::FOURCC`].
    pub four_cc: Option<FourCC>,
    /// Number of bits in an RGB (possibly including alpha) pixel.
    pub rgb_bit_count: u32,
    /// Red mask for reading color data. E.g. `0x00ff0000` for A8R8G8B8.
    pub r_bit_mask: u32,
    /// Green mask for reading color data. E.g. `0x0000ff00` for A8R8G8B8.
    pub g_bit_mask: u32,
    /// Blue mask for reading color data. E.g. `0x000000ff` for A8R8G8B8.
    pub b_bit_mask: u32,
    /// Alpha mask for reading alpha data. E.g. `0xff000000` for A8R8G8B8.
    pub a_bit_mask: u32,
}

impl PixelFormat {
    // The declared structure size (buffer[0]) is informational only and is
    // not validated.
    fn from_buffer(buffer: [u32; 8]) -> Self {
        let flags = PixelFormatFlags::from_bits_retain(buffer[1]);
        let four_cc = if flags.contains(PixelFormatFlags::FOURCC) {
            Some(FourCC::from(buffer[2]))
        } else {
            None
        };

        Self {
            flags,
            four_cc,
            rgb_bit_count: buffer[3],
            r_bit_mask: buffer[4],
            g_bit_mask: buffer[5],
            b_bit_mask: buffer[6],
            a_bit_mask: buffer[7],
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DdsFlags: u32 {
        /// Required in every .dds file.
        const CAPS = 0x1;
        /// Required in every .dds file.
        const HEIGHT = 0x2;
        /// Required in every .dds file.
        const WIDTH = 0x4;
        /// Required when pitch is provided for an uncompressed texture.
        const PITCH = 0x8;
        /// Required in every .dds file.
        const PIXEL_FORMAT = 0x1000;
        /// Required in a mipmapped texture.
        const MIPMAP_COUNT = 0x20000;
        /// Required when pitch is provided for a compressed texture.
        const LINEAR_SIZE = 0x80000;
        /// Required in a depth texture.
        const DEPTH = 0x800000;

        /// Required in every .dds file.
        const REQUIRED = Self::CAPS.bits()
            | Self::HEIGHT.bits()
            | Self::WIDTH.bits()
            | Self::PIXEL_FORMAT.bits();
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DdsCaps: u32 {
        /// Optional; must be used on any file that contains more than one surface.
        const COMPLEX = 0x8;
        /// Optional; should be used for a mipmap.
        const MIPMAP = 0x400000;
        /// Required
        const TEXTURE = 0x1000;
    }

    /// Values which indicate what type of data is in the surface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PixelFormatFlags: u32 {
        /// Texture contains alpha data; the alpha bit mask contains valid data.
        const ALPHAPIXELS = 0x1;
        /// Texture contains compressed RGB data; the four-character code contains valid data.
        const FOURCC = 0x4;
        /// Texture contains uncompressed RGB data; `rgb_bit_count` and the RGB masks contain valid data.
        const RGB = 0x40;
        const RGBA = Self::RGB.bits() | Self::ALPHAPIXELS.bits();
    }
}

/// A four-character code identifying the compression variant of a surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub u32);

impl FourCC {
    pub const DXT1: Self = FourCC(u32::from_le_bytes(*b"DXT1"));
    pub const DXT3: Self = FourCC(u32::from_le_bytes(*b"DXT3"));
    pub const DXT5: Self = FourCC(u32::from_le_bytes(*b"DXT5"));
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        FourCC(value)
    }
}
impl From<FourCC> for u32 {
    fn from(value: FourCC) -> Self {
        value.0
    }
}

impl std::fmt::Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.0.to_le_bytes();
        if bytes.iter().all(|&b| b.is_ascii_alphanumeric()) {
            write!(
                f,
                "FourCC(0x{:x}; {}{}{}{})",
                self.0, bytes[0] as char, bytes[1] as char, bytes[2] as char, bytes[3] as char
            )
        } else {
            write!(f, "FourCC(0x{:x})", self.0)
        }
    }
}
