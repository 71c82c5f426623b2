//! Conversion configuration

use std::path::PathBuf;

/// Default directory holding the Farbox content files
pub const DEFAULT_SOURCE_DIR: &str = "./posts";
/// Default directory the Hugo markdown files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Everything the converter needs to know about a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory scanned (non-recursively) for input files
    pub source_dir: PathBuf,
    /// Directory receiving one `<stem>.md` per input file
    pub output_dir: PathBuf,
    /// Create `output_dir` (and its parents) before converting
    pub create_output_dir: bool,
}

impl ConvertConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            create_output_dir: true,
        }
    }

    pub fn with_create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR, DEFAULT_OUTPUT_DIR)
    }
}
