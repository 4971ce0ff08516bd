//! Stateless cursor navigation over a frame registry, served over HTTP.
//!
//! A client asks for a frame by index in a request header and gets back the
//! frame body plus the current index, the total count and the wraparound
//! neighbors. Nothing is remembered between requests; the registry is the
//! only source of truth for the valid range.

pub mod config;
pub mod error;
pub mod protocol;
pub mod server;

pub use config::{CursorPolicy, NavigationConfig, ServerConfig, DEFAULT_BIND};
pub use error::{NavError, Result, ServeError};
pub use protocol::{parse_cursor, resolve, respond, Navigation};
pub use server::{router, AppState, FrameServer, LAST_FRAME_KEY, LISTENING_PORT_KEY};
