//! Packs a directory of square PNG images into a single ICO file.
//!
//! ```shell
//! pico <path/to/images> <path/to/icon.ico>
//! ```
//!
//! Each PNG file name must contain a size token such as `32x`; at most one
//! file is packed for each of the sizes 256, 128, 96, 64, 48, 32 and 16.

use pico::{Config, Exit, Result};

fn main() -> Exit {
    env_logger::Builder::from_env(env_logger::Env::default()
                                      .default_filter_or("warn"))
        .init();
    Exit::from(run())
}

fn run() -> Result<()> {
    let config = Config::from_args()?;
    let images = pico::pack(&config.source_path, &config.target_path)?;
    println!("Image(s):");
    for (index, image) in images.iter().enumerate() {
        println!(" * #{} '{}' ({})", index + 1, image.name(), image.size());
    }
    println!("Packed {} image(s) into '{}'",
             images.len(),
             config.target_path.display());
    Ok(())
}
