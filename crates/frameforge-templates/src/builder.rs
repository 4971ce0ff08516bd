use std::path::Path;

use frameforge_frame::{
    Element, Frame, FrameRegistry, ImgSize, MarkdownRenderer, Markup, PulldownRenderer,
};

use crate::assets;
use crate::url::normalize_api_url;

/// Builds the stock frames onto a registry.
pub struct Templates<'a, R = PulldownRenderer> {
    registry: &'a FrameRegistry,
    markup: Element,
    renderer: R,
    api_url: String,
}

impl<'a> Templates<'a, PulldownRenderer> {
    /// Templates using the default markdown renderer.
    pub fn new(registry: &'a FrameRegistry, api_url: &str) -> Self {
        Self::with_renderer(registry, api_url, PulldownRenderer::new())
    }
}

impl<'a, R: MarkdownRenderer> Templates<'a, R> {
    /// Templates using a custom markdown renderer.
    pub fn with_renderer(registry: &'a FrameRegistry, api_url: &str, renderer: R) -> Self {
        Self {
            registry,
            markup: Element::new(),
            renderer,
            api_url: normalize_api_url(api_url),
        }
    }

    /// Normalized base URL that client scripts and images point at.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Landing frame: logo, heading and an optional footer of social links.
    ///
    /// An empty `logo` uses `{api_url}/img/logo`.
    pub fn landing(&self, logo: &str, heading: &str, github: &str, x: &str) -> Frame {
        let logo = if logo.is_empty() {
            format!("{}/img/logo", self.api_url)
        } else {
            logo.to_string()
        };
        let img = self.markup.img(&logo, "logo", ImgSize::Large);
        let h1 = self.markup.h1(heading);
        let css = self.markup.css(assets::ZERO_CSS);

        let mut links = Vec::new();
        if !github.is_empty() {
            links.push(self.github_link(github));
        }
        if !x.is_empty() {
            links.push(self.x_link(x));
        }

        if links.is_empty() {
            self.registry.build("zero", true, &[&css, &img, &h1])
        } else {
            let refs: Vec<&Frame> = links.iter().collect();
            let footer = self.footer(&refs);
            self.registry.build("zero", true, &[&css, &img, &h1, &footer])
        }
    }

    /// Footer sub-fragment; built but not registered.
    pub fn footer(&self, links: &[&Frame]) -> Frame {
        let footer = self.markup.wrap_div("footer", links);
        let css = self.markup.css(assets::FOOTER_CSS);
        self.registry.build("", false, &[&css, &footer])
    }

    pub fn github_link(&self, username: &str) -> Frame {
        self.markup.linked_img(
            &format!("https://github.com/{username}"),
            &format!("{}/img/gh", self.api_url),
            "GitHub",
        )
    }

    pub fn x_link(&self, username: &str) -> Frame {
        self.markup.linked_img(
            &format!("https://x.com/{username}"),
            &format!("{}/img/x", self.api_url),
            "X",
        )
    }

    /// Markdown reader frame.
    ///
    /// A missing file or a failed conversion registers an empty frame, so the
    /// deck keeps its shape.
    pub fn readme(&self, path: &Path) -> Frame {
        let html = match self.renderer.convert_file(path) {
            Ok(html) => unwrap_image_paragraphs(&html),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "markdown unavailable, registering empty frame"
                );
                return self.registry.build("", true, &[]);
            }
        };

        let markdown = Frame::new(html);
        let scroll = self.scroll_keybinds();
        let css = self.markup.css(assets::TEXT_CSS);
        self.registry.build("text", true, &[&markdown, &scroll, &css])
    }

    /// Key-driven scrolling script for text frames.
    pub fn scroll_keybinds(&self) -> Frame {
        self.markup.js(assets::SCROLL_JS)
    }

    /// Slideshow frame cycling through `{api_url}/{dir name}/slides.json`.
    pub fn slides(&self, dir: &Path) -> Frame {
        let prefix = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "slides".to_string());
        let base = format!("{}/{}", self.api_url, prefix);
        // A JSON string is a valid JS string literal.
        let quoted = serde_json::Value::String(base).to_string();
        let js = self
            .markup
            .js(&assets::SLIDES_JS.replace(assets::SLIDES_BASE_PLACEHOLDER, &quoted));

        let img = self.markup.img("", "", ImgSize::Medium);
        let css = self.markup.css(assets::SLIDES_CSS);
        self.registry.build("slides", true, &[&img, &css, &js])
    }

    /// Keyboard overlay frame.
    pub fn keyboard(&self) -> Frame {
        let grid = self.markup.div("grid");
        let css = self.markup.css(assets::KEYBOARD_CSS);
        let js = self.markup.js(assets::KEYBOARD_JS);
        self.registry.build("keyboard", true, &[&grid, &css, &js])
    }
}

/// Drop the `<p>` wrapper the markdown renderer puts around standalone images.
fn unwrap_image_paragraphs(html: &str) -> String {
    html.replace("<p><img", "<img")
        .replace("\"></p>", "\">")
        .replace("\" /></p>", "\" />")
        .replace("\"/></p>", "\"/>")
}
