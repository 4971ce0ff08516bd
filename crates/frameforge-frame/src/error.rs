use std::path::PathBuf;

/// Errors that can occur while producing frame content.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A content file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Markdown input was not valid UTF-8.
    #[error("markdown input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
