//! Directory conversion

use crate::config::ConvertConfig;
use crate::core::{Content, ContentParser, HeaderPatterns};
use crate::error::{ConvertError, Result};
use crate::io;
use log::info;
use std::path::{Path, PathBuf};

/// One written output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub converted: Vec<Converted>,
    pub skipped: Vec<PathBuf>,
}

/// Converts every file of a Farbox directory into Hugo markdown
pub struct Converter {
    config: ConvertConfig,
    patterns: HeaderPatterns,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Result<Self> {
        Ok(Self {
            config,
            patterns: HeaderPatterns::new()?,
        })
    }

    /// Convert the whole source directory.
    ///
    /// Stops at the first I/O error; files converted before it stay written.
    pub fn run(&self) -> Result<ConversionSummary> {
        let listing = io::list_source_files(&self.config.source_dir)?;
        if self.config.create_output_dir {
            io::ensure_dir(&self.config.output_dir)?;
        }

        let mut summary = ConversionSummary::default();
        for path in listing.skipped {
            info!("skipping {}: not a regular file", path.display());
            summary.skipped.push(path);
        }
        for source in listing.files {
            let output = self.convert_file(&source)?;
            summary.converted.push(Converted { source, output });
        }
        Ok(summary)
    }

    /// Convert a single file into the output directory, returning the path written
    pub fn convert_file(&self, source: &Path) -> Result<PathBuf> {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = self.read_content(source, &file_name)?;
        let output = io::output_path(&self.config.output_dir, &file_name);
        io::write_output(&output, &io::format(&content))?;

        info!("{} -> {}", source.display(), output.display());
        Ok(output)
    }

    fn read_content(&self, source: &Path, file_name: &str) -> Result<Content> {
        let reader = io::open_source(source)?;
        ContentParser::new(&self.patterns)
            .parse(file_name, reader)
            .map_err(|e| ConvertError::read_file(source, e))
    }
}

/// Convert with the given configuration
pub fn convert(config: ConvertConfig) -> Result<ConversionSummary> {
    Converter::new(config)?.run()
}
