use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::cursor::ByteCursor;
use super::decode::decode_png;
use super::error::{Error, Result};
use super::image::{IconImage, IconSize};

/// The extension a source file must have to be considered.
const PNG_EXTENSION: &str = ".png";

/// Selects at most one PNG file per accepted size from a directory and
/// returns the decoded images, largest first.  Scanning stops as soon as
/// every size has been claimed.
pub fn build_catalog(path: &Path) -> Result<Vec<IconImage>> {
    let scan_error = |source: io::Error| {
        Error::ScanFailed {
            path: path.to_path_buf(),
            source,
        }
    };
    let entries = fs::read_dir(path).map_err(scan_error)?;
    let files = entries.filter_map(|entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => return Some(Err(scan_error(error))),
        };
        let file_path = entry.path();
        if !is_png_name(&file_path) {
            debug!("skipping '{}', not a PNG file", file_path.display());
            return None;
        }
        // Follows symlinks, so a link to a regular file is accepted and a
        // dangling link is skipped like any other non-file.
        match fs::metadata(&file_path) {
            Ok(ref metadata) if metadata.is_file() => Some(Ok(file_path)),
            _ => {
                debug!("skipping '{}', not a regular file",
                       file_path.display());
                None
            }
        }
    });
    select_images(files)
}

/// Claims sizes for a sequence of regular file paths in order, decoding each
/// claimed file.
pub(crate) fn select_images<I>(files: I) -> Result<Vec<IconImage>>
    where I: IntoIterator<Item = Result<PathBuf>>
{
    let mut catalog = Catalog::new();
    for file in files {
        let path = file?;
        if !is_png_name(&path) {
            debug!("skipping '{}', not a PNG file", path.display());
            continue;
        }
        let name = file_name(&path);
        let size = match catalog.claim(&name) {
            Some(size) => size,
            None => {
                debug!("skipping '{}', no unclaimed size token", name);
                continue;
            }
        };
        info!("claimed '{}' as {}", name, size);
        catalog.insert(load_image(&path, &name, size)?);
        if catalog.is_complete() {
            debug!("all sizes claimed, stopping scan");
            break;
        }
    }
    Ok(catalog.into_images())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_png_name(path: &Path) -> bool {
    file_name(path).ends_with(PNG_EXTENSION)
}

/// Reads and decodes one source file.
fn load_image(path: &Path, name: &str, size: IconSize) -> Result<IconImage> {
    let data = fs::read(path).map_err(|source| {
        Error::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;
    decode_png(name, size, ByteCursor::new(data))
}

/// The images selected so far, and the sizes still available.
struct Catalog {
    remaining: Vec<IconSize>,
    images: Vec<IconImage>,
}

impl Catalog {
    fn new() -> Catalog {
        Catalog {
            remaining: IconSize::ALL.to_vec(),
            images: Vec::with_capacity(IconSize::ALL.len()),
        }
    }

    /// Removes and returns the first unclaimed size whose token appears in
    /// the file name.  A name claims at most one size.
    fn claim(&mut self, name: &str) -> Option<IconSize> {
        let index = self.remaining
            .iter()
            .position(|size| name.contains(&size.token()))?;
        Some(self.remaining.remove(index))
    }

    /// Inserts an image, keeping the list ordered largest first.
    fn insert(&mut self, image: IconImage) {
        let index = self.images
            .iter()
            .position(|other| image.size() > other.size())
            .unwrap_or(self.images.len());
        self.images.insert(index, image);
    }

    fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    fn into_images(self) -> Vec<IconImage> {
        self.images
    }
}
