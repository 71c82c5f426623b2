use chrono::{DateTime, Local};
use serde::Serialize;

/// Hugo front matter extracted from a Farbox header
///
/// Field order is the key order of the emitted YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Local>>,
    pub title: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Serialize as a YAML mapping, without document markers
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml.trim_start_matches("---\n").to_string())
    }
}

/// One converted file: metadata plus the remaining body text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub meta: FrontMatter,
    pub body: String,
}

impl Content {
    pub fn new(meta: FrontMatter, body: String) -> Self {
        Self { meta, body }
    }
}
