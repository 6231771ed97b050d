extern crate byteorder;
extern crate pico;
extern crate png;
extern crate tempfile;

use byteorder::{ByteOrder, LittleEndian};
use pico::{Error, IconSize};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn pack_mixed_directory() {
    let dir = tempdir().unwrap();
    let rgb = write_png(dir.path(), "app_16x16.png", 16, png::ColorType::Rgb,
                        png::BitDepth::Eight, None);
    let indexed = write_png(dir.path(), "app_32x32.png", 32,
                            png::ColorType::Indexed, png::BitDepth::Four,
                            Some(16));
    let rgba = write_png(dir.path(), "app_256x256.png", 256,
                         png::ColorType::Rgba, png::BitDepth::Eight, None);
    write_png(dir.path(), "app.png", 48, png::ColorType::Rgba,
              png::BitDepth::Eight, None);
    fs::write(dir.path().join("app_64x64.txt"), b"not an image").unwrap();

    let target = dir.path().join("app.ico");
    let images = pico::pack(dir.path(), &target).unwrap();
    let names: Vec<&str> = images.iter().map(|image| image.name()).collect();
    assert_eq!(names, vec!["app_256x256.png", "app_32x32.png", "app_16x16.png"]);

    let ico = fs::read(&target).unwrap();
    assert_eq!(&ico[0..6], b"\x00\x00\x01\x00\x03\x00");
    assert_eq!(ico.len(), 6 + 3 * 16 + rgba.len() + indexed.len() + rgb.len());

    let expected = [(0, 0, 32, &rgba), (32, 16, 4, &indexed), (16, 0, 24, &rgb)];
    let mut offset = 6 + 3 * 16;
    for (index, &(pixels, colors, bits, data)) in expected.iter().enumerate() {
        let entry = &ico[6 + 16 * index..][..16];
        assert_eq!(entry[0], pixels);
        assert_eq!(entry[1], pixels);
        assert_eq!(entry[2], colors);
        assert_eq!(entry[3], 0);
        assert_eq!(LittleEndian::read_u16(&entry[4..6]), 0);
        assert_eq!(LittleEndian::read_u16(&entry[6..8]), bits);
        assert_eq!(LittleEndian::read_u32(&entry[8..12]) as usize, data.len());
        assert_eq!(LittleEndian::read_u32(&entry[12..16]) as usize, offset);
        assert_eq!(&ico[offset..offset + data.len()], data.as_slice());
        offset += data.len();
    }
}

#[test]
fn embedded_images_are_still_valid_png() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "logo_48x48.png", 48, png::ColorType::GrayscaleAlpha,
              png::BitDepth::Sixteen, None);
    let target = dir.path().join("logo.ico");
    let images = pico::pack(dir.path(), &target).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].size(), IconSize::Px48);
    assert_eq!(images[0].bits_per_pixel(), 32);

    let ico = fs::read(&target).unwrap();
    let offset = LittleEndian::read_u32(&ico[18..22]) as usize;
    assert_eq!(offset, 22);
    let decoder = png::Decoder::new(Cursor::new(&ico[offset..]));
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width, 48);
    assert_eq!(reader.info().height, 48);
}

#[test]
fn no_valid_images_writes_nothing() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "untagged.png", 16, png::ColorType::Rgb,
              png::BitDepth::Eight, None);
    let target = dir.path().join("empty.ico");
    assert!(matches!(pico::pack(dir.path(), &target),
                     Err(Error::NoValidImages { .. })));
    assert!(!target.exists());
}

#[test]
fn invalid_image_writes_nothing() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "wrong_64x.png", 32, png::ColorType::Rgb,
              png::BitDepth::Eight, None);
    let target = dir.path().join("wrong.ico");
    assert!(matches!(pico::pack(dir.path(), &target),
                     Err(Error::SizeMismatch { expected: 64, actual: 32, .. })));
    assert!(!target.exists());
}

#[test]
fn renamed_non_png_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("fake_16x16.png"), b"GIF89a not a png").unwrap();
    let target = dir.path().join("fake.ico");
    assert!(matches!(pico::pack(dir.path(), &target),
                     Err(Error::NotAPng { .. })));
}

#[test]
fn unwritable_target() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "ok_16x.png", 16, png::ColorType::Rgb,
              png::BitDepth::Eight, None);
    let target = dir.path().join("missing").join("ok.ico");
    assert!(matches!(pico::pack(dir.path(), &target),
                     Err(Error::WriteFailed { .. })));
}

/// Writes a blank PNG image to a directory and returns the file's bytes.
fn write_png(dir: &Path,
             name: &str,
             size: u32,
             color_type: png::ColorType,
             bit_depth: png::BitDepth,
             palette_size: Option<usize>)
             -> Vec<u8> {
    let samples = match color_type {
        png::ColorType::Grayscale | png::ColorType::Indexed => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
    };
    let row_bits = size as usize * samples * bit_depth as usize;
    let pixel_data = vec![0u8; (row_bits + 7) / 8 * size as usize];

    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, size, size);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        if let Some(colors) = palette_size {
            encoder.set_palette(vec![0u8; 3 * colors]);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&pixel_data).unwrap();
        writer.finish().unwrap();
    }
    fs::write(dir.join(name), &data).unwrap();
    data
}
