//! Library for packing square PNG images into a Windows icon (.ico) file
//!
//! PNG files are embedded in the ICO file verbatim; only the metadata needed
//! for the ICO directory (`IHDR` and `PLTE`) is read from them.  See
//! https://en.wikipedia.org/wiki/ICO_(file_format) for more information
//! about the file format.

#![warn(missing_docs)]

mod catalog;
mod config;
mod cursor;
mod decode;
mod error;
mod icondir;
mod image;

pub use catalog::build_catalog;
pub use config::Config;
pub use cursor::ByteCursor;
pub use decode::{decode_png, ColorType};
pub use error::{Error, Exit, Result};
pub use icondir::{encode_ico, total_length};
pub use image::{IconImage, IconSize};

use log::info;
use std::fs;
use std::path::Path;

/// Packs the PNG images in a source directory into an ICO file at the target
/// path, and returns the packed images in ICO directory order.  Nothing is
/// written if any image fails to load.
pub fn pack(source_path: &Path, target_path: &Path) -> Result<Vec<IconImage>> {
    let images = build_catalog(source_path)?;
    if images.is_empty() {
        return Err(Error::NoValidImages { path: source_path.to_path_buf() });
    }
    let ico = encode_ico(&images);
    fs::write(target_path, &ico).map_err(|source| {
        Error::WriteFailed {
            path: target_path.to_path_buf(),
            source,
        }
    })?;
    info!("wrote {} bytes to '{}'", ico.len(), target_path.display());
    Ok(images)
}
