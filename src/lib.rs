//! farbox2hugo: convert Farbox content files into Hugo markdown
//!
//! A Farbox post may start with loose `Key: value` lines (`Title`, `Date`,
//! `Tags`, `Category`). This library reads those lines from the first ten
//! lines of each file, turns them into YAML front matter and writes
//! `<stem>.md` files Hugo can consume.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use farbox2hugo::{ConvertConfig, Converter, Result};
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new(ConvertConfig::new("posts", "content/post"))?;
//!     let summary = converter.run()?;
//!     println!("converted {} files", summary.converted.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`crate::core`]: front matter types, header recognition, date parsing, line scanning
//! - [`io`]: directory listing, output rendering and writing
//! - [`convert`]: the per-directory driver
//! - [`error`]: error type shared by all of the above

pub use config::ConvertConfig;
pub use convert::{convert, ConversionSummary, Converted, Converter};
pub use crate::core::{Content, FrontMatter};
pub use error::{ConvertError, Result};

pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod io;
