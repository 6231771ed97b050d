use log::debug;

use super::cursor::ByteCursor;
use super::error::{Error, Result};
use super::image::{IconImage, IconSize};

/// The first eight bytes of every PNG file.
const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// The bytes following a chunk's length field that are not counted by it:
/// the 4-byte chunk type and the 4-byte CRC.
const CHUNK_FRAMING_LENGTH: usize = 8;

/// Bits per pixel assumed until an `IHDR` chunk is seen.
const DEFAULT_BITS_PER_PIXEL: u8 = 32;

/// The color types a PNG `IHDR` chunk may declare.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorType {
    /// Grayscale samples (type 0).
    Grayscale,
    /// RGB samples (type 2).
    Rgb,
    /// Palette indices (type 3).
    Indexed,
    /// Grayscale samples with alpha (type 4).
    GrayscaleAlpha,
    /// RGB samples with alpha (type 6).
    Rgba,
}

impl ColorType {
    /// Get the color type with the given `IHDR` number, if any.
    pub fn from_number(number: u8) -> Option<ColorType> {
        match number {
            0 => Some(ColorType::Grayscale),
            2 => Some(ColorType::Rgb),
            3 => Some(ColorType::Indexed),
            4 => Some(ColorType::GrayscaleAlpha),
            6 => Some(ColorType::Rgba),
            _ => None,
        }
    }

    /// Returns the number of samples stored for each pixel.
    pub fn samples_per_pixel(self) -> u8 {
        match self {
            ColorType::Grayscale | ColorType::Indexed => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    /// Returns true if a PNG may combine this color type with the given bit
    /// depth.
    ///
    /// # Examples
    /// ```
    /// use pico::ColorType;
    /// assert!(ColorType::Grayscale.allows_bit_depth(2));
    /// assert!(ColorType::Rgba.allows_bit_depth(16));
    /// assert!(!ColorType::Indexed.allows_bit_depth(16));
    /// ```
    pub fn allows_bit_depth(self, bit_depth: u8) -> bool {
        let depths: &[u8] = match self {
            ColorType::Grayscale => &[1, 2, 4, 8, 16],
            ColorType::Indexed => &[1, 2, 4, 8],
            ColorType::Rgb |
            ColorType::GrayscaleAlpha |
            ColorType::Rgba => &[8, 16],
        };
        depths.contains(&bit_depth)
    }
}

/// Reads the metadata of a PNG file and returns it as an icon image of the
/// expected size, holding the complete file.  Only the `IHDR`, `PLTE` and
/// `IEND` chunks are examined; other chunks and all CRCs are skipped.
pub fn decode_png(name: &str,
                  expected_size: IconSize,
                  mut cursor: ByteCursor)
                  -> Result<IconImage> {
    if !cursor.has_signature(PNG_SIGNATURE)? {
        return Err(Error::NotAPng { name: name.to_string() });
    }
    let mut palette_size: u32 = 0;
    let mut bits_per_pixel = DEFAULT_BITS_PER_PIXEL;
    loop {
        let chunk_length = cursor.read_u32_be()?;
        let next_chunk_position = cursor
            .position()
            .saturating_add(chunk_length as usize)
            .saturating_add(CHUNK_FRAMING_LENGTH);
        if cursor.has_signature(b"IHDR")? {
            bits_per_pixel = read_header(name, expected_size, &mut cursor)?;
            debug!("'{}': IHDR, {} bits per pixel", name, bits_per_pixel);
        } else if cursor.has_signature(b"PLTE")? {
            palette_size = chunk_length / 3;
            debug!("'{}': PLTE, {} colors", name, palette_size);
        } else if cursor.has_signature(b"IEND")? {
            break;
        }
        cursor.seek(next_chunk_position);
    }
    Ok(IconImage::new(name.to_string(),
                      expected_size,
                      palette_size,
                      bits_per_pixel,
                      cursor.into_data()))
}

/// Validates the body of an `IHDR` chunk and returns the bits per pixel.
fn read_header(name: &str,
               expected_size: IconSize,
               cursor: &mut ByteCursor)
               -> Result<u8> {
    let width = cursor.read_u32_be()?;
    let height = cursor.read_u32_be()?;
    if width < 1 || height < 1 {
        return Err(Error::InvalidDimensions {
            name: name.to_string(),
            width,
            height,
        });
    }
    if width != height {
        return Err(Error::NotSquare {
            name: name.to_string(),
            width,
            height,
        });
    }
    if width != expected_size.pixels() {
        return Err(Error::SizeMismatch {
            name: name.to_string(),
            expected: expected_size.pixels(),
            actual: width,
        });
    }
    let bit_depth = cursor.read_u8()?;
    let color_number = cursor.read_u8()?;
    let color_type = ColorType::from_number(color_number).ok_or_else(|| {
        Error::InvalidColorType {
            name: name.to_string(),
            color_type: color_number,
        }
    })?;
    if !color_type.allows_bit_depth(bit_depth) {
        return Err(Error::InvalidBitDepth {
            name: name.to_string(),
            color_type: color_number,
            bit_depth,
        });
    }
    Ok(bit_depth * color_type.samples_per_pixel())
}
