#![allow(dead_code)]

//! Builders for synthetic DDJ/DDS payloads.

const DDS_FLAGS_REQUIRED: u32 = 0x1 | 0x2 | 0x4 | 0x1000;
const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_FOURCC: u32 = 0x4;
const DDPF_RGB: u32 = 0x40;
const CAPS_TEXTURE: u32 = 0x1000;

fn write_u32_le(out: &mut [u8], offset: usize, value: u32) {
    out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn dds_prefix(width: u32, height: u32) -> Vec<u8> {
    let mut out = vec![0; 128];
    out[..4].copy_from_slice(b"DDS ");
    write_u32_le(&mut out, 4, 124);
    write_u32_le(&mut out, 8, DDS_FLAGS_REQUIRED);
    write_u32_le(&mut out, 12, height);
    write_u32_le(&mut out, 16, width);
    write_u32_le(&mut out, 76, 32);
    write_u32_le(&mut out, 108, CAPS_TEXTURE);
    out
}

/// A DDS payload with a four-character-code pixel format.
pub fn four_cc_payload(width: u32, height: u32, four_cc: [u8; 4], pixel_data: &[u8]) -> Vec<u8> {
    let mut out = dds_prefix(width, height);
    write_u32_le(&mut out, 80, DDPF_FOURCC);
    out[84..88].copy_from_slice(&four_cc);
    out.extend_from_slice(pixel_data);
    out
}

/// A DDS payload with an uncompressed, bit-mask-described pixel format.
pub fn masked_payload(
    width: u32,
    height: u32,
    rgb_bit_count: u32,
    masks: [u32; 4],
    pixel_data: &[u8],
) -> Vec<u8> {
    let [r, g, b, a] = masks;
    let mut out = dds_prefix(width, height);
    let mut flags = DDPF_RGB;
    if a != 0 {
        flags |= DDPF_ALPHAPIXELS;
    }
    write_u32_le(&mut out, 80, flags);
    write_u32_le(&mut out, 88, rgb_bit_count);
    write_u32_le(&mut out, 92, r);
    write_u32_le(&mut out, 96, g);
    write_u32_le(&mut out, 100, b);
    write_u32_le(&mut out, 104, a);
    out.extend_from_slice(pixel_data);
    out
}

/// Wraps a DDS payload in a 20-byte DDJ container header.
pub fn ddj_wrap(dds: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(20 + dds.len());
    out.extend_from_slice(b"JMXVDDJ 1");
    out.extend_from_slice(&[0x30; 3]);
    out.extend_from_slice(&((20 + dds.len() - 1) as u32).to_be_bytes());
    out.extend_from_slice(&[0x03, 0x00, 0x00, 0x00]);
    out.extend_from_slice(dds);
    out
}

/// An 8-byte BC1 color block.
pub fn bc1_block_bytes(c0: u16, c1: u16, indexes: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    out.extend_from_slice(&c0.to_le_bytes());
    out.extend_from_slice(&c1.to_le_bytes());
    out.extend_from_slice(&indexes.to_le_bytes());
    out
}
