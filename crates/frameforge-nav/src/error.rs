use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced while resolving a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The registry holds no frames.
    #[error("no frames available")]
    Empty,

    /// The cursor is not an integer (strict policy only).
    #[error("invalid frame cursor {0:?}")]
    InvalidCursor(String),

    /// The cursor is outside `0..count` (strict policy only).
    #[error("frame cursor {cursor} out of range (count {count})")]
    OutOfRange { cursor: i64, count: usize },
}

impl NavError {
    pub fn status(&self) -> StatusCode {
        match self {
            NavError::Empty => StatusCode::NOT_FOUND,
            NavError::InvalidCursor(_) | NavError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for NavError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

/// Errors that can occur while running the frame server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Failed to bind the listen address.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// An I/O error occurred while serving.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
