pub mod formatter;
pub mod fs;

pub use formatter::format;
pub use fs::{ensure_dir, list_source_files, open_source, output_path, write_output, SourceListing};
