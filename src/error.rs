//! Client error type
//!
//! Every variant aborts the session. A peer hang-up during the run loop is
//! not an error and never shows up here.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ClientError {
    /// Connect, read or write failed, or transferred fewer bytes than the record
    Io(io::Error),
    /// The readiness poll itself failed
    Poll(nix::Error),
    /// Server answered the setup request with Failed
    HandshakeFailed { reason: String },
    /// Server asked for further authentication, which we do not implement
    AuthenticateUnsupported,
    /// Setup status byte outside 0..=2
    UnexpectedStatus(u8),
    MalformedSetup(&'static str),
    /// A specific event was required and a different one arrived
    UnexpectedEvent { expected: u8, got: u8 },
    /// Authority file could not be read
    Authority { path: PathBuf, source: io::Error },
    /// Authority file holds fewer bytes than a cookie
    AuthorityTooShort { path: PathBuf, len: usize },
    /// A single image row does not fit in one request
    RowTooWide {
        line_bytes: usize,
        max_request_bytes: usize,
    },
    /// Image dimensions do not fit in the 16-bit wire fields
    SurfaceTooLarge { width: usize, height: usize },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Io(e) => write!(f, "transport error: {}", e),
            ClientError::Poll(e) => write!(f, "failed to poll X11 socket for events: {}", e),
            ClientError::HandshakeFailed { reason } => {
                write!(f, "X server rejected connection: {}", reason)
            }
            ClientError::AuthenticateUnsupported => {
                write!(f, "X server requested further authentication (unsupported)")
            }
            ClientError::UnexpectedStatus(status) => {
                write!(f, "unexpected setup status {}", status)
            }
            ClientError::MalformedSetup(what) => write!(f, "malformed setup reply: {}", what),
            ClientError::UnexpectedEvent { expected, got } => {
                write!(f, "expected event {}, got {}", expected, got)
            }
            ClientError::Authority { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ClientError::AuthorityTooShort { path, len } => write!(
                f,
                "{} is {} bytes, too short to hold a cookie",
                path.display(),
                len
            ),
            ClientError::RowTooWide {
                line_bytes,
                max_request_bytes,
            } => write!(
                f,
                "one image row is {} bytes but requests are limited to {} bytes",
                line_bytes, max_request_bytes
            ),
            ClientError::SurfaceTooLarge { width, height } => {
                write!(f, "surface {}x{} exceeds the protocol's 16-bit limits", width, height)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(e) => Some(e),
            ClientError::Poll(e) => Some(e),
            ClientError::Authority { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(e: io::Error) -> Self {
        ClientError::Io(e)
    }
}

impl From<nix::Error> for ClientError {
    fn from(e: nix::Error) -> Self {
        ClientError::Poll(e)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
