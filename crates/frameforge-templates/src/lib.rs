//! Ready-made frames: landing page, markdown reader, slideshow and keyboard
//! overlay.
//!
//! Each template assembles escaped markup, embedded CSS and a small client
//! script, then registers the result on a [`frameforge_frame::FrameRegistry`].

pub mod assets;
pub mod builder;
pub mod url;

pub use builder::Templates;
pub use url::{normalize_api_url, DEFAULT_API_URL};
