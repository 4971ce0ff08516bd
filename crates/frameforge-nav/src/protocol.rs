use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;
use frameforge_frame::FrameRegistry;

use crate::config::{CursorPolicy, NavigationConfig};
use crate::error::{NavError, Result};

/// Content type of every frame body.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Resolved position within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub current: usize,
    pub total: usize,
    pub prev: usize,
    pub next: usize,
}

impl Navigation {
    /// Position `current` in a registry of `total` frames, with circular
    /// neighbors. Requires `current < total`.
    pub(crate) fn at(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            prev: (current + total - 1) % total,
            next: (current + 1) % total,
        }
    }
}

/// Parse a raw cursor header value.
///
/// Returns `None` for anything that is not a decimal integer.
pub fn parse_cursor(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Map an inbound cursor onto a valid index of a registry holding `count`
/// frames.
pub fn resolve(cursor: Option<&str>, count: usize, policy: CursorPolicy) -> Result<Navigation> {
    if count == 0 {
        return Err(NavError::Empty);
    }

    let Some(raw) = cursor else {
        return Ok(Navigation::at(0, count));
    };

    let current = match (parse_cursor(raw), policy) {
        (Some(idx), _) if idx >= 0 && (idx as u64) < count as u64 => idx as usize,
        (_, CursorPolicy::Permissive) => 0,
        (None, CursorPolicy::Strict) => return Err(NavError::InvalidCursor(raw.to_string())),
        (Some(cursor), CursorPolicy::Strict) => {
            return Err(NavError::OutOfRange { cursor, count });
        }
    };

    Ok(Navigation::at(current, count))
}

/// Serve one frame for a request carrying `headers`.
///
/// On success the response carries the frame body and the navigation
/// headers; on failure no navigation headers are written.
pub fn respond(
    registry: &FrameRegistry,
    config: &NavigationConfig,
    headers: &HeaderMap,
) -> Result<(Navigation, Response)> {
    // A non-ASCII header value is treated as a malformed cursor.
    let cursor = headers
        .get(&config.cursor_header)
        .map(|value| value.to_str().unwrap_or(""));

    let nav = resolve(cursor, registry.count(), config.policy)?;
    let frame = registry.get(nav.current).ok_or(NavError::Empty)?;

    let mut response = Response::new(Body::from(frame.body()));
    *response.status_mut() = StatusCode::OK;
    let out = response.headers_mut();
    out.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    out.insert(config.cursor_header.clone(), HeaderValue::from(nav.current));
    out.insert(config.total_header.clone(), HeaderValue::from(nav.total));
    if config.emit_neighbors {
        out.insert(config.prev_header.clone(), HeaderValue::from(nav.prev));
        out.insert(config.next_header.clone(), HeaderValue::from(nav.next));
    }

    Ok((nav, response))
}
