use crate::core::Content;
use crate::error::ConvertError;
use log::warn;

const DELIMITER: &str = "---\n";

/// Render converted content as Hugo markdown.
///
/// A front matter that fails to serialize is logged and written as `{}` so
/// the body is never lost.
pub fn format(content: &Content) -> String {
    let meta = match content.meta.to_yaml() {
        Ok(yaml) => yaml,
        Err(e) => {
            warn!("front matter for {:?} written empty: {}", content.meta.title, ConvertError::from(e));
            "{}\n".to_string()
        }
    };

    let mut out = String::with_capacity(meta.len() + content.body.len() + 2 * DELIMITER.len());
    out.push_str(DELIMITER);
    out.push_str(&meta);
    if !meta.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str(&content.body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrontMatter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_layout() {
        let content = Content::new(
            FrontMatter {
                title: "Hello World".to_string(),
                tags: vec!["go".to_string(), "cli".to_string()],
                ..Default::default()
            },
            "Body line one.\nBody line two.\n".to_string(),
        );
        assert_eq!(
            format(&content),
            "---\ntitle: Hello World\ncategories: []\ntags:\n- go\n- cli\n---\nBody line one.\nBody line two.\n"
        );
    }

    #[test]
    fn test_format_empty_body() {
        let content = Content::new(
            FrontMatter {
                title: "t".to_string(),
                ..Default::default()
            },
            String::new(),
        );
        assert!(format(&content).ends_with("tags: []\n---\n"));
    }
}
