use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use axum::http::HeaderName;

/// Default listen address.
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 1001));

/// How a cursor that does not name a valid frame is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// Fall back to frame 0.
    #[default]
    Permissive,
    /// Reject with 400 Bad Request. A missing cursor still means frame 0.
    Strict,
}

/// Controls the navigation headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Request header carrying the cursor; also echoes the current index.
    pub cursor_header: HeaderName,
    /// Response header carrying the frame count.
    pub total_header: HeaderName,
    /// Response header carrying the previous index.
    pub prev_header: HeaderName,
    /// Response header carrying the next index.
    pub next_header: HeaderName,
    pub policy: CursorPolicy,
    /// When false, prev/next headers are omitted.
    pub emit_neighbors: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cursor_header: HeaderName::from_static("x-frame"),
            total_header: HeaderName::from_static("x-frames"),
            prev_header: HeaderName::from_static("x-frame-prev"),
            next_header: HeaderName::from_static("x-frame-next"),
            policy: CursorPolicy::Permissive,
            emit_neighbors: true,
        }
    }
}

impl NavigationConfig {
    /// Default headers with strict cursor validation.
    pub fn strict() -> Self {
        Self {
            policy: CursorPolicy::Strict,
            ..Self::default()
        }
    }
}

/// Frame server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub nav: NavigationConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            nav: NavigationConfig::default(),
        }
    }
}
