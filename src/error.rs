//! Unified error types for the driver.

use std::fmt;

// ---------------------------------------------------------------------------
// HostError
// ---------------------------------------------------------------------------

/// Errors arising from host I/O operations.
///
/// "File does not exist" is not an error for path classification: `probe`
/// resolves it to [`PathKind::None`](crate::host::PathKind::None) instead.
/// Every other host-level failure surfaces here and is terminal for the
/// current invocation; the driver performs no retries.
#[derive(Debug)]
pub enum HostError {
    /// Underlying OS-level failure (permissions, hardware, broken pipe).
    Io(std::io::Error),
    /// The interactive input stream reached end-of-file.
    StreamClosed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::StreamClosed => write!(f, "input stream closed"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
