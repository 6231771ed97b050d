use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use super::image::IconImage;

/// The length of the ICONDIR header, in bytes.
const HEADER_LENGTH: usize = 6;

/// The length of one ICONDIRENTRY, in bytes.
const ENTRY_LENGTH: usize = 16;

/// The ICONDIR resource type number for icons (cursors use 2).
const ICON_RESOURCE_TYPE: u16 = 1;

/// Encodes images into an ICO file, in the given order.  Each image's PNG
/// data is embedded verbatim after the directory, without padding.
pub fn encode_ico(images: &[IconImage]) -> Vec<u8> {
    let directory_length = HEADER_LENGTH + ENTRY_LENGTH * images.len();
    let mut output = vec![0u8; directory_length];
    output.reserve(total_length(images) - directory_length);

    LittleEndian::write_u16(&mut output[0..2], 0); // reserved
    LittleEndian::write_u16(&mut output[2..4], ICON_RESOURCE_TYPE);
    LittleEndian::write_u16(&mut output[4..6], images.len() as u16);

    let mut data_offset = directory_length;
    for (index, image) in images.iter().enumerate() {
        let start = HEADER_LENGTH + ENTRY_LENGTH * index;
        let entry = &mut output[start..start + ENTRY_LENGTH];
        // A 256-pixel edge wraps to 0, which ICO readers take as 256.
        let pixels = image.size().pixels() as u8;
        entry[0] = pixels;
        entry[1] = pixels;
        entry[2] = image.palette_size() as u8;
        entry[3] = 0; // reserved
        LittleEndian::write_u16(&mut entry[4..6], 0); // color planes
        LittleEndian::write_u16(&mut entry[6..8],
                                u16::from(image.bits_per_pixel()));
        LittleEndian::write_u32(&mut entry[8..12], image.data().len() as u32);
        LittleEndian::write_u32(&mut entry[12..16], data_offset as u32);
        debug!("entry {}: '{}' at offset {}",
               index + 1,
               image.name(),
               data_offset);
        data_offset += image.data().len();
    }
    for image in images {
        output.extend_from_slice(image.data());
    }
    output
}

/// Returns the encoded length of the ICO file, in bytes, including the
/// header and directory.
pub fn total_length(images: &[IconImage]) -> usize {
    let mut length = HEADER_LENGTH + ENTRY_LENGTH * images.len();
    for image in images {
        length += image.data().len();
    }
    length
}
