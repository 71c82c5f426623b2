pub mod date;
pub mod front_matter;
pub mod header;
pub mod parser;

pub use date::parse_local;
pub use front_matter::{Content, FrontMatter};
pub use header::{HeaderLine, HeaderPatterns};
pub use parser::{file_stem, ContentParser};
