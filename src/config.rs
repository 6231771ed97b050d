use clap::{arg, command, value_parser, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

use super::error::Result;

/// Command line configuration for a packing run.
#[derive(Debug)]
pub struct Config {
    /// The directory to scan for PNG images.
    pub source_path: PathBuf,

    /// The ICO file to write.
    pub target_path: PathBuf,
}

impl Config {
    /// Parses the process arguments.
    pub fn from_args() -> Result<Config> {
        Config::parse_from(std::env::args_os())
    }

    /// Parses an argument list whose first item is the program name.
    pub fn parse_from<I, T>(args: I) -> Result<Config>
        where I: IntoIterator<Item = T>,
              T: Into<OsString> + Clone
    {
        // Exactly two positionals; anything else, including `--help`, is a
        // usage error.
        let matches = command!()
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(arg!(<source> "The directory of PNG images to pack")
                     .value_parser(value_parser!(PathBuf))
                     .allow_hyphen_values(true))
            .arg(arg!(<target> "The ICO file to write")
                     .value_parser(value_parser!(PathBuf))
                     .allow_hyphen_values(true))
            .try_get_matches_from(args)?;
        Ok(Config {
            source_path: path_arg(&matches, "source"),
            target_path: path_arg(&matches, "target"),
        })
    }
}

fn path_arg(matches: &ArgMatches, id: &str) -> PathBuf {
    // Both positionals are required, so clap has already rejected a missing
    // one.
    matches.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}
