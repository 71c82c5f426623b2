use crate::core::parser::file_stem;
use crate::error::{ConvertError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Direct children of a source directory, sorted by file name
#[derive(Debug, Default)]
pub struct SourceListing {
    pub files: Vec<PathBuf>,
    /// Entries that are not regular files
    pub skipped: Vec<PathBuf>,
}

/// List the entries of `dir` without descending into subdirectories
pub fn list_source_files(dir: &Path) -> Result<SourceListing> {
    let mut listing = SourceListing::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ConvertError::list_dir(dir, e))?;
        if entry.file_type().is_file() {
            listing.files.push(entry.into_path());
        } else {
            listing.skipped.push(entry.into_path());
        }
    }
    Ok(listing)
}

pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| ConvertError::read_file(path, e))
}

/// `<stem>.md` inside `output_dir`
pub fn output_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(format!("{}.md", file_stem(file_name)))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ConvertError::create_dir(path, e))
}

/// Create or truncate `path` and write `content` to it
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::write_file(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::write_file(path, e))
}
