//! Build HTML frame decks and serve them to cursor-driven clients.
//!
//! frameforge assembles self-contained HTML panels ("frames") at startup and
//! serves them one at a time; the client steps through them with an index
//! carried in a request header.
//!
//! # Crate Structure
//!
//! - [`frame`] — Frames, asset consolidation, markup/markdown builders, the registry
//! - [`store`] — Reactive key to integer coordination store
//! - [`nav`] — Cursor navigation protocol and HTTP server (behind `nav` feature)
//! - [`templates`] — Stock landing/README/slides/keyboard frames (behind `templates` feature)

/// Re-export frame types.
pub mod frame {
    pub use frameforge_frame::*;
}

/// Re-export coordination store types.
pub mod store {
    pub use frameforge_store::*;
}

/// Re-export navigation types (requires `nav` feature).
#[cfg(feature = "nav")]
pub mod nav {
    pub use frameforge_nav::*;
}

/// Re-export template types (requires `templates` feature).
#[cfg(feature = "templates")]
pub mod templates {
    pub use frameforge_templates::*;
}
