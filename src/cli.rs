use std::path::PathBuf;

use clap::Parser;

use crate::convert::ExportMode;
use crate::error::ConvertError;

/// Convert Yaak workspace exports to Postman collections and environments
#[derive(Debug, Parser)]
#[command(name = "yaak2postman", version)]
pub struct Args {
    /// Conversion to run (`env` or `collection`), or the file path when no
    /// second argument is given
    #[arg(value_name = "TYPE")]
    pub mode_or_file: Option<String>,

    /// Path to the Yaak JSON export
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

impl Args {
    /// Apply the positional heuristic: a single argument is the file path
    /// (both conversions run); with two, the first must be a valid mode
    /// token. The mode is validated before any file access.
    pub fn resolve(self) -> Result<(Option<ExportMode>, PathBuf), ConvertError> {
        match (self.mode_or_file, self.file) {
            (Some(file), None) => Ok((None, PathBuf::from(file))),
            (Some(mode), Some(file)) => Ok((Some(mode.parse()?), PathBuf::from(file))),
            (None, _) => Err(ConvertError::MissingFileArgument),
        }
    }
}
