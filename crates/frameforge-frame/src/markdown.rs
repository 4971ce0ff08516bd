use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

use crate::error::{FrameError, Result};

/// Converts markdown source into HTML.
pub trait MarkdownRenderer: Send + Sync {
    /// Convert a markdown byte buffer into HTML.
    fn convert(&self, input: &[u8]) -> Result<String>;

    /// Read a markdown file and convert it.
    fn convert_file(&self, path: &Path) -> Result<String> {
        let content = std::fs::read(path).map_err(|source| FrameError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert(&content)
    }
}

/// CommonMark renderer with the GitHub-flavored extensions enabled.
#[derive(Debug, Clone, Copy)]
pub struct PulldownRenderer {
    options: Options,
}

impl PulldownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_MATH);
        Self { options }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn convert(&self, input: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(input)?;
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_and_paragraph() {
        let html = PulldownRenderer::new()
            .convert(b"# Title\n\nSome *text*.\n")
            .unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn renders_gfm_table_and_strikethrough() {
        let html = PulldownRenderer::new()
            .convert(b"| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n")
            .unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let result = PulldownRenderer::new().convert(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(FrameError::InvalidUtf8(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = PulldownRenderer::new().convert_file(Path::new("/nonexistent/README.md"));
        assert!(matches!(result, Err(FrameError::Read { .. })));
    }
}
