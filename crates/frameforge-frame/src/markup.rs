//! Escaped HTML fragment builders.
//!
//! Every text or attribute value handed to a builder is escaped; only the
//! `css` and `js` builders take raw content, since their bodies are code.

use std::fmt::Write as _;

use crate::frame::Frame;

/// Display width preset for images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImgSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ImgSize {
    fn style(self) -> &'static str {
        match self {
            ImgSize::Small => "width: 25vw; display: block; margin: 0 auto;",
            ImgSize::Medium => "width: 50vw; display: block; margin: 0 auto;",
            ImgSize::Large => "width: 75vw; display: block; margin: 0 auto;",
        }
    }
}

/// Element-construction capability used by frame templates.
///
/// Text helpers (`h1`, `paragraph`, …) delegate to [`Markup::tag`].
pub trait Markup {
    /// `<tag>text</tag>` with `text` escaped.
    fn tag(&self, tag: &str, text: &str) -> Frame {
        Frame::new(format!("<{tag}>{}</{tag}>", escape_html(text)))
    }

    fn h1(&self, text: &str) -> Frame {
        self.tag("h1", text)
    }

    fn h2(&self, text: &str) -> Frame {
        self.tag("h2", text)
    }

    fn h3(&self, text: &str) -> Frame {
        self.tag("h3", text)
    }

    fn h4(&self, text: &str) -> Frame {
        self.tag("h4", text)
    }

    fn h5(&self, text: &str) -> Frame {
        self.tag("h5", text)
    }

    fn h6(&self, text: &str) -> Frame {
        self.tag("h6", text)
    }

    fn paragraph(&self, text: &str) -> Frame {
        self.tag("p", text)
    }

    fn span(&self, text: &str) -> Frame {
        self.tag("span", text)
    }

    fn strong(&self, text: &str) -> Frame {
        self.tag("strong", text)
    }

    fn em(&self, text: &str) -> Frame {
        self.tag("em", text)
    }

    fn code(&self, text: &str) -> Frame {
        self.tag("code", text)
    }

    fn kbd(&self, text: &str) -> Frame {
        self.tag("kbd", text)
    }

    fn button(&self, label: &str) -> Frame {
        self.tag("button", label)
    }

    /// Empty `<div>` carrying a class.
    fn div(&self, class: &str) -> Frame;

    /// `<div class=…>` wrapping the given children in order.
    fn wrap_div(&self, class: &str, children: &[&Frame]) -> Frame;

    fn link(&self, href: &str, text: &str) -> Frame;

    /// `<ul>`/`<ol>` with one escaped `<li>` per item.
    fn list(&self, items: &[&str], ordered: bool) -> Frame;

    fn img(&self, src: &str, alt: &str, size: ImgSize) -> Frame;

    /// An image wrapped in a link.
    fn linked_img(&self, href: &str, src: &str, alt: &str) -> Frame;

    fn video(&self, src: &str) -> Frame;

    fn audio(&self, src: &str) -> Frame;

    fn iframe(&self, src: &str) -> Frame;

    fn embed(&self, src: &str) -> Frame;

    fn source(&self, src: &str) -> Frame;

    fn canvas(&self, id: &str) -> Frame;

    /// `<table>` with one row per inner slice.
    fn table(&self, rows: &[Vec<String>]) -> Frame;

    /// Raw stylesheet in a `<style>` block.
    fn css(&self, css: &str) -> Frame;

    /// Raw script in a `<script>` block.
    fn js(&self, js: &str) -> Frame;
}

/// The stock markup builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Element;

impl Element {
    pub fn new() -> Self {
        Self
    }
}

impl Markup for Element {
    fn div(&self, class: &str) -> Frame {
        Frame::new(format!(r#"<div class="{}"></div>"#, escape_html(class)))
    }

    fn wrap_div(&self, class: &str, children: &[&Frame]) -> Frame {
        let mut out = format!(r#"<div class="{}">"#, escape_html(class));
        for child in children {
            out.push_str(child.as_str());
        }
        out.push_str("</div>");
        Frame::new(out)
    }

    fn link(&self, href: &str, text: &str) -> Frame {
        Frame::new(format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(href),
            escape_html(text)
        ))
    }

    fn list(&self, items: &[&str], ordered: bool) -> Frame {
        let tag = if ordered { "ol" } else { "ul" };
        let mut out = format!("<{tag}>");
        for item in items {
            let _ = write!(out, "<li>{}</li>", escape_html(item));
        }
        let _ = write!(out, "</{tag}>");
        Frame::new(out)
    }

    fn img(&self, src: &str, alt: &str, size: ImgSize) -> Frame {
        Frame::new(format!(
            r#"<img src="{}" alt="{}" style="{}"/>"#,
            escape_html(src),
            escape_html(alt),
            size.style()
        ))
    }

    fn linked_img(&self, href: &str, src: &str, alt: &str) -> Frame {
        Frame::new(format!(
            r#"<a href="{}" target="_blank" rel="noopener"><img src="{}" alt="{}"/></a>"#,
            escape_html(href),
            escape_html(src),
            escape_html(alt)
        ))
    }

    fn video(&self, src: &str) -> Frame {
        Frame::new(format!(r#"<video src="{}"></video>"#, escape_html(src)))
    }

    fn audio(&self, src: &str) -> Frame {
        Frame::new(format!(r#"<audio src="{}"></audio>"#, escape_html(src)))
    }

    fn iframe(&self, src: &str) -> Frame {
        Frame::new(format!(r#"<iframe src="{}"></iframe>"#, escape_html(src)))
    }

    fn embed(&self, src: &str) -> Frame {
        Frame::new(format!(r#"<embed src="{}"/>"#, escape_html(src)))
    }

    fn source(&self, src: &str) -> Frame {
        Frame::new(format!(r#"<source src="{}"/>"#, escape_html(src)))
    }

    fn canvas(&self, id: &str) -> Frame {
        Frame::new(format!(r#"<canvas id="{}"></canvas>"#, escape_html(id)))
    }

    fn table(&self, rows: &[Vec<String>]) -> Frame {
        let mut out = String::from("<table>");
        for row in rows {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", escape_html(cell));
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        Frame::new(out)
    }

    fn css(&self, css: &str) -> Frame {
        Frame::new(format!("<style>{css}</style>"))
    }

    fn js(&self, js: &str) -> Frame {
        Frame::new(format!("<script>{js}</script>"))
    }
}

/// Escape text for use in HTML content or a quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
