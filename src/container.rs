//! The DDJ container format.
//!
//! DDJ is a proprietary Joymax format that wraps an ordinary DDS file in a
//! 20-byte header:
//!
//! | Offset | Size | Content                      |
//! |--------|------|------------------------------|
//! | 0      | 9    | `"JMXVDDJ 1"` magic          |
//! | 9      | 3    | Padding (`0x30` x3)          |
//! | 12     | 4    | File size minus 1, big-endian|
//! | 16     | 4    | Constant `0x03000000`        |
//! | 20     | ...  | DDS file data                |
//!
//! Only the magic is validated; the size and constant fields are skipped.

use crate::FormatError;

/// The magic bytes at the start of every DDJ file.
pub const DDJ_MAGIC: [u8; 9] = *b"JMXVDDJ 1";

/// The size of the DDJ header in bytes. The wrapped DDS file starts here.
pub const DDJ_HEADER_SIZE: usize = 20;

/// Returns whether the given buffer starts with the DDJ magic bytes.
///
/// This only sniffs the magic. It does not guarantee that [`unwrap_ddj`]
/// will succeed, nor that the wrapped payload is a valid DDS file.
pub fn is_ddj(data: &[u8]) -> bool {
    data.len() >= DDJ_MAGIC.len() && data[..DDJ_MAGIC.len()] == DDJ_MAGIC
}

/// Strips the DDJ container header and returns the wrapped DDS file bytes.
pub fn unwrap_ddj(data: &[u8]) -> Result<&[u8], FormatError> {
    if data.len() < DDJ_HEADER_SIZE {
        return Err(FormatError::ContainerTooSmall(data.len()));
    }

    if data[..DDJ_MAGIC.len()] != DDJ_MAGIC {
        let mut magic = [0; 9];
        magic.copy_from_slice(&data[..9]);
        return Err(FormatError::InvalidContainerMagic(magic));
    }

    Ok(&data[DDJ_HEADER_SIZE..])
}
