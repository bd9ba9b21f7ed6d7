use crate::header::{FourCC, Header, PixelFormatFlags};
use crate::container;

/// The container or DDS header is structurally invalid.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The buffer is shorter than the 20-byte DDJ container header.
    ContainerTooSmall(usize),
    /// The first 9 bytes do not spell the DDJ magic.
    InvalidContainerMagic([u8; 9]),
    /// The payload is shorter than the 128-byte DDS header prefix.
    TooSmall(usize),
    /// The first 4 bytes of the payload do not spell `'DDS '`.
    InvalidMagicBytes([u8; 4]),
    /// The declared header size is not 124.
    InvalidHeaderSize(u32),
}
impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::ContainerTooSmall(len) => {
                write!(
                    f,
                    "DDJ container of {} bytes is too small, the header requires {} bytes",
                    len,
                    container::DDJ_HEADER_SIZE
                )
            }
            FormatError::InvalidContainerMagic(bytes) => {
                write!(
                    f,
                    "Invalid DDJ magic bytes {:?}, expected {:?} (ASCII: 'JMXVDDJ 1')",
                    bytes,
                    container::DDJ_MAGIC
                )
            }
            FormatError::TooSmall(len) => {
                write!(
                    f,
                    "DDS payload of {} bytes is too small, magic and header require {} bytes",
                    len,
                    Header::DATA_OFFSET
                )
            }
            FormatError::InvalidMagicBytes(bytes) => {
                write!(
                    f,
                    "Invalid magic bytes {:?}, expected {:?} (ASCII: 'DDS ')",
                    bytes,
                    Header::MAGIC
                )
            }
            FormatError::InvalidHeaderSize(size) => {
                write!(f, "Invalid DDS header size of {}, expected 124", size)
            }
        }
    }
}
impl std::error::Error for FormatError {}

/// The header is structurally valid, but describes a pixel layout this crate
/// does not decode.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnsupportedFormatError {
    FourCC(FourCC),
    PixelFormatFlags(PixelFormatFlags),
    RgbBitCount(u32),
}
impl std::fmt::Display for UnsupportedFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedFormatError::FourCC(four_cc) => {
                write!(f, "Unsupported {:?} in the DDS pixel format", four_cc)
            }
            UnsupportedFormatError::PixelFormatFlags(flags) => {
                write!(
                    f,
                    "Unsupported pixel format flags {:#x} in the DDS header",
                    flags.bits()
                )
            }
            UnsupportedFormatError::RgbBitCount(count) => {
                write!(
                    f,
                    "Unsupported rgb_bit_count of {}, expected 8, 16, 24, or 32",
                    count
                )
            }
        }
    }
}
impl std::error::Error for UnsupportedFormatError {}

/// Any error produced while decoding a DDJ/DDS buffer.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    Format(FormatError),
    Unsupported(UnsupportedFormatError),
}
impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Format(error) => write!(f, "{}", error),
            DecodeError::Unsupported(error) => write!(f, "{}", error),
        }
    }
}
impl From<FormatError> for DecodeError {
    fn from(error: FormatError) -> Self {
        DecodeError::Format(error)
    }
}
impl From<UnsupportedFormatError> for DecodeError {
    fn from(error: UnsupportedFormatError) -> Self {
        DecodeError::Unsupported(error)
    }
}
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Format(error) => Some(error),
            DecodeError::Unsupported(error) => Some(error),
        }
    }
}
