use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{ExitCode, Termination};
use thiserror::Error;

/// A result that may contain a packing error.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal error raised while packing PNG images into an ICO file.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line arguments could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The source directory could not be enumerated.
    #[error("could not scan images from '{}': {source}", .path.display())]
    ScanFailed {
        /// The source directory.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A selected source file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    ReadFailed {
        /// The source file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The data does not start with a PNG signature.
    #[error("file '{name}' is not a PNG image")]
    NotAPng {
        /// The name of the source file.
        name: String,
    },

    /// A read went past the end of the data.
    #[error("could not read {length} byte(s) at offset {offset}, \
             stream is truncated")]
    TruncatedStream {
        /// The offset of the failed read.
        offset: usize,
        /// The number of bytes requested.
        length: usize,
    },

    /// The image width or height is zero.
    #[error("image '{name}' has invalid dimensions ({width}x{height})")]
    InvalidDimensions {
        /// The name of the source file.
        name: String,
        /// The width in pixels.
        width: u32,
        /// The height in pixels.
        height: u32,
    },

    /// The image is not square.
    #[error("image '{name}' is not square ({width}x{height})")]
    NotSquare {
        /// The name of the source file.
        name: String,
        /// The width in pixels.
        width: u32,
        /// The height in pixels.
        height: u32,
    },

    /// The image size differs from the size named by its file name.
    #[error("image '{name}' is {actual}x{actual}, but its name claims \
             {expected}x{expected}")]
    SizeMismatch {
        /// The name of the source file.
        name: String,
        /// The size claimed by the file name.
        expected: u32,
        /// The actual edge length in pixels.
        actual: u32,
    },

    /// The PNG color type is not one of 0, 2, 3, 4 or 6.
    #[error("image '{name}' has invalid color type {color_type}")]
    InvalidColorType {
        /// The name of the source file.
        name: String,
        /// The color type read from `IHDR`.
        color_type: u8,
    },

    /// The PNG bit depth is not allowed for the color type.
    #[error("image '{name}' has bit depth {bit_depth}, which is invalid \
             for color type {color_type}")]
    InvalidBitDepth {
        /// The name of the source file.
        name: String,
        /// The color type read from `IHDR`.
        color_type: u8,
        /// The bit depth read from `IHDR`.
        bit_depth: u8,
    },

    /// No image in the source directory could be selected.
    #[error("no valid images in '{}'", .path.display())]
    NoValidImages {
        /// The source directory.
        path: PathBuf,
    },

    /// The ICO file could not be written.
    #[error("could not write '{}': {source}", .path.display())]
    WriteFailed {
        /// The target file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// The process exit status of a packing run.
pub struct Exit {
    result: Result<()>,
}

impl From<Result<()>> for Exit {
    fn from(result: Result<()>) -> Exit {
        Exit { result }
    }
}

impl Termination for Exit {
    fn report(self) -> ExitCode {
        match self.result {
            Ok(()) => ExitCode::SUCCESS,
            Err(Error::Usage(error)) => {
                let _ = error.print();
                ExitCode::FAILURE
            }
            Err(error) => {
                let _ = writeln!(io::stderr(), "error: {}", error);
                ExitCode::FAILURE
            }
        }
    }
}
