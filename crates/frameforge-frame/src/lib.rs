//! HTML frame assembly with asset consolidation and an append-only registry.
//!
//! This is the core layer of frameforge. A frame is one self-contained,
//! pre-rendered HTML panel:
//! - Built from escaped markup fragments (see [`markup`])
//! - Optionally fed by rendered markdown (see [`markdown`])
//! - Consolidated so it carries at most one `<style>` and one `<script>` block
//! - Appended to a [`FrameRegistry`] whose indices never change

pub mod consolidate;
pub mod error;
pub mod frame;
pub mod markdown;
pub mod markup;
pub mod registry;

pub use consolidate::consolidate;
pub use error::{FrameError, Result};
pub use frame::Frame;
pub use markdown::{MarkdownRenderer, PulldownRenderer};
pub use markup::{escape_html, Element, ImgSize, Markup};
pub use registry::FrameRegistry;
