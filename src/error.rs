//! Error types for the farbox2hugo library
//!
//! I/O failures carry the path they happened on so the binary can report
//! which file stopped the run. Date and YAML errors never stop a run; the
//! converter logs them and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Listing the source directory failed
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Opening or reading a source file failed
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the output directory failed
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating or writing an output file failed
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A date string matched none of the supported layouts
    #[error("unable to parse date: {input:?}")]
    DateParse { input: String },

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn list_dir(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ListDir {
            path: path.into(),
            source,
        }
    }

    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn date_parse(input: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.into(),
        }
    }
}
