//! Line scanner turning a Farbox post into [`Content`]

use crate::core::date::parse_local;
use crate::core::front_matter::{Content, FrontMatter};
use crate::core::header::{split_list, HeaderLine, HeaderPatterns, HEADER_ZONE_LINES, SEPARATOR};
use log::{debug, warn};
use std::io::{self, BufRead};

const BOM: char = '\u{feff}';

/// Text before the first `.` of a file name
pub fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or_default()
}

pub struct ContentParser<'p> {
    patterns: &'p HeaderPatterns,
}

impl<'p> ContentParser<'p> {
    pub fn new(patterns: &'p HeaderPatterns) -> Self {
        Self { patterns }
    }

    /// Scan `reader` line by line and build the converted content.
    ///
    /// `file_name` supplies the fallback date and title.
    pub fn parse<R: BufRead>(&self, file_name: &str, reader: R) -> io::Result<Content> {
        let mut meta = FrontMatter::default();
        let mut body = String::new();

        for (ln, line) in reader.lines().enumerate() {
            let mut line = line?;
            if ln == 0 {
                if let Some(rest) = line.strip_prefix(BOM) {
                    line = rest.to_string();
                }
            }
            if ln >= HEADER_ZONE_LINES {
                push_line(&mut body, &line);
                continue;
            }
            if line == SEPARATOR {
                continue;
            }

            match self.patterns.classify(&line) {
                HeaderLine::Title(v) => meta.title = v.to_string(),
                HeaderLine::Date(v) => match parse_local(v) {
                    Ok(date) => meta.date = Some(date),
                    Err(e) => {
                        warn!("{}: {}", file_name, e);
                        meta.date = None;
                    }
                },
                HeaderLine::Tags(v) => meta.tags = split_list(v),
                HeaderLine::Category(v) => meta.categories = split_list(v),
                HeaderLine::Unsupported => debug!("{}: dropping header line {:?}", file_name, line),
                HeaderLine::Text => push_line(&mut body, &line),
            }
        }

        if !meta.has_date() {
            if let Some(raw) = self.patterns.filename_date(file_name) {
                match parse_local(raw) {
                    Ok(date) => meta.date = Some(date),
                    Err(e) => warn!("{}: date in file name: {}", file_name, e),
                }
            }
        }
        if !meta.has_title() {
            meta.title = file_stem(file_name).to_string();
        }

        Ok(Content::new(meta, body))
    }
}

fn push_line(body: &mut String, line: &str) {
    body.push_str(line);
    body.push('\n');
}
