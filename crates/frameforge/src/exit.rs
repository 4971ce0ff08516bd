use std::fmt;
use std::io;

use frameforge_nav::{NavError, ServeError};

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const ADDR_IN_USE: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::AddrInUse | io::ErrorKind::AddrNotAvailable => ADDR_IN_USE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn serve_error(context: &str, err: ServeError) -> CliError {
    match err {
        ServeError::Bind { source, addr } => io_error(&format!("{context} ({addr})"), source),
        ServeError::Io(source) => io_error(context, source),
    }
}

pub fn nav_error(context: &str, err: NavError) -> CliError {
    match err {
        NavError::Empty => CliError::new(FAILURE, format!("{context}: {err}")),
        NavError::InvalidCursor(_) | NavError::OutOfRange { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}
