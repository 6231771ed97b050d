use std::fmt;

/// The edge lengths accepted for images in an ICO file.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IconSize {
    /// 16x16 pixels.
    Px16,
    /// 32x32 pixels.
    Px32,
    /// 48x48 pixels.
    Px48,
    /// 64x64 pixels.
    Px64,
    /// 96x96 pixels.
    Px96,
    /// 128x128 pixels.
    Px128,
    /// 256x256 pixels.
    Px256,
}

impl IconSize {
    /// All sizes, largest first.  This is also the order in which file name
    /// tokens are tried.
    pub const ALL: [IconSize; 7] = [IconSize::Px256,
                                    IconSize::Px128,
                                    IconSize::Px96,
                                    IconSize::Px64,
                                    IconSize::Px48,
                                    IconSize::Px32,
                                    IconSize::Px16];

    /// Returns the edge length in pixels.
    ///
    /// # Examples
    /// ```
    /// use pico::IconSize;
    /// assert_eq!(IconSize::Px48.pixels(), 48);
    /// assert_eq!(IconSize::Px256.pixels(), 256);
    /// ```
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Px16 => 16,
            IconSize::Px32 => 32,
            IconSize::Px48 => 48,
            IconSize::Px64 => 64,
            IconSize::Px96 => 96,
            IconSize::Px128 => 128,
            IconSize::Px256 => 256,
        }
    }

    /// Returns the token a file name must contain to claim this size.
    ///
    /// # Examples
    /// ```
    /// use pico::IconSize;
    /// assert_eq!(IconSize::Px32.token(), "32x");
    /// ```
    pub fn token(self) -> String {
        format!("{}x", self.pixels())
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "{}x{}", self.pixels(), self.pixels())
    }
}

/// A validated PNG image, ready to be embedded in an ICO file.
#[derive(Clone, Debug)]
pub struct IconImage {
    name: String,
    size: IconSize,
    palette_size: u32,
    bits_per_pixel: u8,
    data: Vec<u8>,
}

impl IconImage {
    /// Creates an image from its already-validated parts.  `data` must be the
    /// complete PNG file.
    pub fn new(name: String,
               size: IconSize,
               palette_size: u32,
               bits_per_pixel: u8,
               data: Vec<u8>)
               -> IconImage {
        IconImage {
            name,
            size,
            palette_size,
            bits_per_pixel,
            data,
        }
    }

    /// Returns the name of the image's source file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the edge length of the image.
    pub fn size(&self) -> IconSize {
        self.size
    }

    /// Returns the number of palette entries, or 0 without a palette.
    pub fn palette_size(&self) -> u32 {
        self.palette_size
    }

    /// Returns the number of bits per pixel.
    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    /// Returns the complete PNG file, byte for byte as it was read.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
