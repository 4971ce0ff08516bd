//! Stylesheets and client scripts compiled into the binary.

pub const ZERO_CSS: &str = include_str!("../assets/zero.css");
pub const FOOTER_CSS: &str = include_str!("../assets/footer.css");
pub const TEXT_CSS: &str = include_str!("../assets/text.css");
pub const SLIDES_CSS: &str = include_str!("../assets/slides.css");
pub const KEYBOARD_CSS: &str = include_str!("../assets/keyboard.css");

pub const SCROLL_JS: &str = include_str!("../assets/scroll.js");
pub const KEYBOARD_JS: &str = include_str!("../assets/keyboard.js");

/// Slideshow script; `__SLIDES_BASE__` is replaced by a quoted base URL.
pub const SLIDES_JS: &str = include_str!("../assets/slides.js");
pub const SLIDES_BASE_PLACEHOLDER: &str = "__SLIDES_BASE__";
