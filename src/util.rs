/// Reads `N` little-endian `u32`s from the start of `bytes`.
///
/// The caller must ensure `bytes` holds at least `N * 4` bytes.
pub(crate) fn u32_le_array<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut buffer = [0_u32; N];
    bytemuck::cast_slice_mut::<u32, u8>(&mut buffer).copy_from_slice(&bytes[..N * 4]);
    for i in buffer.iter_mut() {
        *i = u32::from_le(*i);
    }
    buffer
}

pub(crate) fn div_ceil(a: u32, b: u32) -> u32 {
    let d = a / b;
    if a % b != 0 {
        d + 1
    } else {
        d
    }
}
