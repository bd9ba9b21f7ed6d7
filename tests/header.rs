use ddj::{DdsCaps, DdsFlags, FormatError, FourCC, Header, PixelFormatFlags};

mod util;

#[test]
fn parse_rejects_short_payloads() {
    assert_eq!(Header::parse(b""), Err(FormatError::TooSmall(0)));

    let payload = util::four_cc_payload(4, 4, *b"DXT1", &[]);
    assert_eq!(payload.len(), 128);
    assert_eq!(
        Header::parse(&payload[..127]),
        Err(FormatError::TooSmall(127))
    );
    assert!(Header::parse(&payload).is_ok());
}

#[test]
fn parse_rejects_bad_magic() {
    let mut payload = util::four_cc_payload(4, 4, *b"DXT1", &[]);
    payload[..4].copy_from_slice(b"DDS!");
    assert_eq!(
        Header::parse(&payload),
        Err(FormatError::InvalidMagicBytes(*b"DDS!"))
    );
}

#[test]
fn parse_rejects_bad_header_size() {
    let mut payload = util::four_cc_payload(4, 4, *b"DXT1", &[]);
    payload[4..8].copy_from_slice(&123_u32.to_le_bytes());
    assert_eq!(
        Header::parse(&payload),
        Err(FormatError::InvalidHeaderSize(123))
    );
}

#[test]
fn parse_reads_dimensions_and_four_cc() {
    let payload = util::four_cc_payload(640, 480, *b"DXT5", &[]);
    let header = Header::parse(&payload).unwrap();

    assert_eq!(header.width, 640);
    assert_eq!(header.height, 480);
    assert!(header.flags.contains(DdsFlags::REQUIRED));
    assert!(header.caps.contains(DdsCaps::TEXTURE));

    assert!(header.pixel_format.flags.contains(PixelFormatFlags::FOURCC));
    assert_eq!(header.pixel_format.four_cc, Some(FourCC::DXT5));
}

#[test]
fn parse_reads_channel_masks() {
    let masks = [0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF000000];
    let payload = util::masked_payload(16, 8, 32, masks, &[]);
    let header = Header::parse(&payload).unwrap();

    let pf = &header.pixel_format;
    assert!(pf.flags.contains(PixelFormatFlags::RGBA));
    assert_eq!(pf.four_cc, None);
    assert_eq!(pf.rgb_bit_count, 32);
    assert_eq!(
        [pf.r_bit_mask, pf.g_bit_mask, pf.b_bit_mask, pf.a_bit_mask],
        masks
    );
}

#[test]
fn four_cc_is_none_without_the_flag() {
    // bytes 84..88 spell DXT1, but the FOURCC flag is not set
    let mut payload = util::masked_payload(4, 4, 32, [0xFF, 0xFF00, 0xFF0000, 0], &[]);
    payload[84..88].copy_from_slice(b"DXT1");

    let header = Header::parse(&payload).unwrap();
    assert_eq!(header.pixel_format.four_cc, None);
}

#[test]
fn unknown_flag_bits_are_retained() {
    let mut payload = util::four_cc_payload(4, 4, *b"DXT1", &[]);
    payload[80..84].copy_from_slice(&0x8000_0004_u32.to_le_bytes());

    let header = Header::parse(&payload).unwrap();
    assert_eq!(header.pixel_format.flags.bits(), 0x8000_0004);
    assert!(header.pixel_format.flags.contains(PixelFormatFlags::FOURCC));
}

#[test]
fn four_cc_debug_spells_ascii_codes() {
    assert_eq!(format!("{:?}", FourCC::DXT1), "FourCC(0x31545844; DXT1)");
    assert_eq!(format!("{:?}", FourCC(0x1)), "FourCC(0x1)");
}
