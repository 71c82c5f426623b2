//! Farbox header line recognition
//!
//! A Farbox post may open with loose `Key: value` lines. Four keys are
//! understood when they start the line; any other line containing a
//! `word: value` shape is an unsupported header and gets dropped.

use crate::error::Result;
use regex::Regex;

/// Number of leading lines that may hold header fields
pub const HEADER_ZONE_LINES: usize = 10;

/// Separator line that is dropped inside the header zone
pub const SEPARATOR: &str = "---";

/// Classification of a single header-zone line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Title(&'a str),
    Date(&'a str),
    Tags(&'a str),
    Category(&'a str),
    /// `word: value` with an unrecognized key
    Unsupported,
    /// Not header-shaped, belongs to the body
    Text,
}

/// Header patterns, compiled once per run
#[derive(Debug, Clone)]
pub struct HeaderPatterns {
    title: Regex,
    date: Regex,
    tags: Regex,
    category: Regex,
    generic: Regex,
    filename_date: Regex,
}

impl HeaderPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: Regex::new(r"(?i)^\s*title:\s*(.+)$")?,
            date: Regex::new(r"(?i)^\s*date:\s*(.+)$")?,
            tags: Regex::new(r"(?i)^\s*tags:\s*(.+)$")?,
            category: Regex::new(r"(?i)^\s*category:\s*(.+)$")?,
            generic: Regex::new(r"[0-9A-Za-z_]+:\s*.+")?,
            filename_date: Regex::new(r"(\d{4}-\d{2}-\d{2}).?")?,
        })
    }

    /// Classify a line from the header zone
    pub fn classify<'a>(&self, line: &'a str) -> HeaderLine<'a> {
        let capture = |re: &Regex| {
            re.captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
        };

        if let Some(v) = capture(&self.title) {
            HeaderLine::Title(v)
        } else if let Some(v) = capture(&self.date) {
            HeaderLine::Date(v)
        } else if let Some(v) = capture(&self.tags) {
            HeaderLine::Tags(v)
        } else if let Some(v) = capture(&self.category) {
            HeaderLine::Category(v)
        } else if self.generic.is_match(line) {
            HeaderLine::Unsupported
        } else {
            HeaderLine::Text
        }
    }

    /// First `YYYY-MM-DD` found in a file name
    pub fn filename_date<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.filename_date
            .captures(file_name)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// Split a `Tags:`/`Category:` value on single spaces
pub fn split_list(value: &str) -> Vec<String> {
    value.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> HeaderPatterns {
        HeaderPatterns::new().unwrap()
    }

    #[test]
    fn test_recognized_keys_are_case_insensitive() {
        let p = patterns();
        assert_eq!(p.classify("Title: Foo"), HeaderLine::Title("Foo"));
        assert_eq!(p.classify("TITLE:Foo Bar"), HeaderLine::Title("Foo Bar"));
        assert_eq!(p.classify("date: 2020-01-02"), HeaderLine::Date("2020-01-02"));
        assert_eq!(p.classify("Tags: a b c"), HeaderLine::Tags("a b c"));
        assert_eq!(p.classify("category: life"), HeaderLine::Category("life"));
    }

    #[test]
    fn test_unsupported_and_text_lines() {
        let p = patterns();
        assert_eq!(p.classify("Custom: value"), HeaderLine::Unsupported);
        assert_eq!(p.classify("status:draft"), HeaderLine::Unsupported);
        assert_eq!(p.classify("Just a sentence."), HeaderLine::Text);
        assert_eq!(p.classify("Title:"), HeaderLine::Text);
        assert_eq!(p.classify(""), HeaderLine::Text);
    }

    #[test]
    fn test_recognized_key_must_start_the_line() {
        let p = patterns();
        assert_eq!(p.classify("Subtitle: nope"), HeaderLine::Unsupported);
        assert_eq!(p.classify("  Title: Indented"), HeaderLine::Title("Indented"));
    }

    #[test]
    fn test_key_value_anywhere_is_unsupported() {
        let p = patterns();
        assert_eq!(p.classify("see https://example.com"), HeaderLine::Unsupported);
        assert_eq!(p.classify("My note: x"), HeaderLine::Unsupported);
        assert_eq!(p.classify("ends with a colon:"), HeaderLine::Text);
    }

    #[test]
    fn test_filename_date() {
        let p = patterns();
        assert_eq!(p.filename_date("2022-01-15-hello.txt"), Some("2022-01-15"));
        assert_eq!(p.filename_date("2022-01-15.md"), Some("2022-01-15"));
        assert_eq!(p.filename_date("post-2021-12-31"), Some("2021-12-31"));
        assert_eq!(p.filename_date("hello.txt"), None);
    }

    #[test]
    fn test_split_list_on_single_spaces() {
        assert_eq!(split_list("a b c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("go"), vec!["go"]);
        assert_eq!(split_list("a  b"), vec!["a", "", "b"]);
    }
}
