use byteorder::{LittleEndian, ReadBytesExt};
use icopack::{
    EncodeError, FilterType, FrameSpec, IconEncoder, ImageResizer,
    PngCompressor, SourceImage,
};
use std::io::Cursor;

//===========================================================================//

#[test]
fn encode_opaque_rgb_source() {
    let source = SourceImage::from_rgb_data(300, 200, &gradient_rgb(300, 200))
        .unwrap();
    let specs = [FrameSpec::square(16), FrameSpec::square(32)];
    let icon = IconEncoder::new().encode(&source, &specs).unwrap();
    let bytes = icon.as_bytes();
    assert_eq!(&bytes[0..6], b"\x00\x00\x01\x00\x02\x00");
    assert_eq!(&bytes[6..8], b"\x10\x10");
    assert_eq!(&bytes[12..14], b"\x20\x00");
    assert_eq!(&bytes[22..24], b"\x20\x20");
    assert_eq!(&bytes[28..30], b"\x20\x00");
    let entries = read_directory(bytes);
    assert_eq!(
        bytes.len(),
        6 + 32 + entries[0].data_size as usize + entries[1].data_size as usize
    );
    for (entry, spec) in entries.iter().zip(specs.iter()) {
        let (width, height, rgba) = decode_png(payload(bytes, entry));
        assert_eq!((width, height), (spec.width(), spec.height()));
        assert!(rgba.chunks(4).all(|pixel| pixel[3] == 0xff));
    }
}

#[test]
fn encode_default_sizes() {
    let source = SourceImage::from_rgb_data(64, 64, &gradient_rgb(64, 64))
        .unwrap();
    let icon = IconEncoder::new().encode_defaults(&source).unwrap();
    let bytes = icon.as_bytes();
    let entries = read_directory(bytes);
    let sides: Vec<u8> = entries.iter().map(|entry| entry.width).collect();
    assert_eq!(sides, vec![16, 24, 32, 48, 64, 128, 255]);
    check_layout(bytes, &entries);
    for entry in entries.iter() {
        assert_eq!(entry.width, entry.height);
        assert_eq!(entry.num_colors, 0);
        assert_eq!(entry.color_planes, 0);
        assert_eq!(entry.bits_per_pixel, 32);
        let (width, height, _) = decode_png(payload(bytes, entry));
        assert_eq!((width, height), (entry.width as u32, entry.height as u32));
    }
}

#[test]
fn encode_preserves_alpha() {
    // Left half fully transparent, right half fully opaque.
    let (width, height) = (64, 64);
    let mut rgba = Vec::new();
    for _ in 0..height {
        for col in 0..width {
            let alpha = if col < width / 2 { 0 } else { 0xff };
            rgba.extend_from_slice(&[0x20, 0x80, 0xc0, alpha]);
        }
    }
    let source = SourceImage::from_rgba_data(width, height, rgba).unwrap();
    assert!(source.has_alpha());
    let icon =
        IconEncoder::new().encode(&source, &[FrameSpec::square(16)]).unwrap();
    let entries = read_directory(icon.as_bytes());
    let (width, _, rgba) = decode_png(payload(icon.as_bytes(), &entries[0]));
    let alpha_at = |x: u32, y: u32| rgba[(4 * (y * width + x) + 3) as usize];
    assert!(alpha_at(1, 8) < 0x20);
    assert!(alpha_at(14, 8) > 0xe0);
}

#[test]
fn encode_non_square_frames() {
    let source = SourceImage::from_rgb_data(30, 20, &gradient_rgb(30, 20))
        .unwrap();
    let specs = [FrameSpec::new(48, 32), FrameSpec::new(1, 255)];
    let icon = IconEncoder::new().encode(&source, &specs).unwrap();
    let entries = read_directory(icon.as_bytes());
    assert_eq!((entries[0].width, entries[0].height), (48, 32));
    assert_eq!((entries[1].width, entries[1].height), (1, 255));
    let (width, height, _) = decode_png(payload(icon.as_bytes(), &entries[1]));
    assert_eq!((width, height), (1, 255));
}

#[test]
fn encode_is_deterministic() {
    let source = SourceImage::from_rgb_data(50, 40, &gradient_rgb(50, 40))
        .unwrap();
    let specs = FrameSpec::defaults();
    let encoder = IconEncoder::with_collaborators(
        ImageResizer::new(FilterType::CatmullRom),
        PngCompressor::new(png::Compression::Best),
    );
    let first = encoder.encode(&source, &specs).unwrap();
    let second = encoder.encode(&source, &specs).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn encode_rejects_bad_requests() {
    let source = SourceImage::from_rgb_data(4, 4, &gradient_rgb(4, 4)).unwrap();
    let encoder = IconEncoder::new();
    assert!(matches!(
        encoder.encode(&source, &[]),
        Err(EncodeError::EmptySpecList)
    ));
    assert!(matches!(
        encoder.encode(&source, &[FrameSpec::new(0, 10)]),
        Err(EncodeError::InvalidDimension { index: 0, width: 0, height: 10 })
    ));
    assert!(matches!(
        encoder.encode(&source, &[FrameSpec::new(256, 10)]),
        Err(EncodeError::InvalidDimension { index: 0, width: 256, .. })
    ));
}

#[test]
fn container_entries_match_bytes() {
    let source = SourceImage::from_rgb_data(20, 20, &gradient_rgb(20, 20))
        .unwrap();
    let specs = [FrameSpec::square(8), FrameSpec::square(12)];
    let icon = IconEncoder::new().encode(&source, &specs).unwrap();
    let parsed = read_directory(icon.as_bytes());
    for (index, entry) in icon.entries().iter().enumerate() {
        assert_eq!(entry.width_byte(), parsed[index].width);
        assert_eq!(entry.data_size(), parsed[index].data_size);
        assert_eq!(entry.data_offset(), parsed[index].data_offset);
        assert_eq!(
            icon.payload(index).unwrap(),
            payload(icon.as_bytes(), &parsed[index])
        );
    }
}

#[test]
fn save_icon_to_disk() {
    let source = SourceImage::from_rgb_data(10, 10, &gradient_rgb(10, 10))
        .unwrap();
    let icon =
        IconEncoder::new().encode(&source, &[FrameSpec::square(10)]).unwrap();
    let path = std::env::temp_dir()
        .join(format!("icopack-save-{}.ico", std::process::id()));
    icon.save(&path).unwrap();
    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written.as_slice(), icon.as_bytes());
}

//===========================================================================//

struct RawEntry {
    width: u8,
    height: u8,
    num_colors: u8,
    color_planes: u16,
    bits_per_pixel: u16,
    data_size: u32,
    data_offset: u32,
}

fn read_directory(bytes: &[u8]) -> Vec<RawEntry> {
    let mut reader = Cursor::new(bytes);
    assert_eq!(reader.read_u16::<LittleEndian>().unwrap(), 0);
    assert_eq!(reader.read_u16::<LittleEndian>().unwrap(), 1);
    let count = reader.read_u16::<LittleEndian>().unwrap();
    let mut entries = Vec::new();
    for _ in 0..count {
        let width = reader.read_u8().unwrap();
        let height = reader.read_u8().unwrap();
        let num_colors = reader.read_u8().unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0);
        entries.push(RawEntry {
            width,
            height,
            num_colors,
            color_planes: reader.read_u16::<LittleEndian>().unwrap(),
            bits_per_pixel: reader.read_u16::<LittleEndian>().unwrap(),
            data_size: reader.read_u32::<LittleEndian>().unwrap(),
            data_offset: reader.read_u32::<LittleEndian>().unwrap(),
        });
    }
    entries
}

fn check_layout(bytes: &[u8], entries: &[RawEntry]) {
    let mut expected_offset = 6 + 16 * entries.len() as u32;
    for entry in entries.iter() {
        assert_eq!(entry.data_offset, expected_offset);
        assert!(entry.data_size > 0);
        expected_offset += entry.data_size;
    }
    assert_eq!(expected_offset as usize, bytes.len());
}

fn payload<'a>(bytes: &'a [u8], entry: &RawEntry) -> &'a [u8] {
    let start = entry.data_offset as usize;
    &bytes[start..(start + entry.data_size as usize)]
}

fn decode_png(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let mut reader = png::Decoder::new(data).read_info().unwrap();
    assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    let mut buffer = vec![0u8; reader.output_buffer_size()];
    reader.next_frame(&mut buffer).unwrap();
    (reader.info().width, reader.info().height, buffer)
}

fn gradient_rgb(width: u32, height: u32) -> Vec<u8> {
    let mut rgb = Vec::new();
    for row in 0..height {
        for col in 0..width {
            rgb.push((col * 255 / width) as u8);
            rgb.push((row * 255 / height) as u8);
            rgb.push(0x40);
        }
    }
    rgb
}

//===========================================================================//
