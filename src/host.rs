//! Host I/O service injected into the engine.
//!
//! The engine's only channel to the host environment is the [`Host`] bundle:
//! path classification, file reads, console writes, and one interactive
//! query. Calls are single-flight, the engine never issues two overlapping
//! operations, so the stream handles are guarded by plain async mutexes
//! with no contention in practice.

use crate::error::HostError;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stderr, Stdin, Stdout};
use tokio::sync::Mutex;

/// Final path segment that marks inline command-line code masquerading as a
/// file. Reads of such paths bypass the file system entirely.
pub const EVAL_PSEUDO_FILE: &str = "<eval>";

/// Classification of a probed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Missing, or present but neither regular file nor directory.
    None,
}

/// Asynchronous host capability bundle handed to the engine by shared
/// reference. Stateless except for the OS resources it proxies.
#[async_trait]
pub trait Host: Send + Sync {
    /// Classify `path`. A missing path resolves to [`PathKind::None`]
    /// without erroring; any other host failure errors.
    async fn probe(&self, path: &Path) -> Result<PathKind, HostError>;

    /// Full text content of `path`. Errors on any failure, including
    /// not-found; callers are expected to probe first.
    async fn read(&self, path: &Path) -> Result<String, HostError>;

    /// Write one line to standard output (terminator appended).
    async fn write(&self, text: &str) -> Result<(), HostError>;

    /// Write one diagnostic line to standard error (terminator appended).
    async fn warn(&self, text: &str) -> Result<(), HostError>;

    /// Print `prompt` without a terminator, then suspend until one line of
    /// interactive input is available. Resolves to the line without its
    /// trailing terminator.
    async fn ask(&self, prompt: &str) -> Result<String, HostError>;
}

// ---------------------------------------------------------------------------
// StdHost
// ---------------------------------------------------------------------------

/// [`Host`] over the process's standard streams and the local file system.
///
/// Stdin is wrapped in one persistent buffered reader so consecutive `ask`
/// calls never drop input buffered past the first line terminator.
pub struct StdHost {
    stdin: Mutex<BufReader<Stdin>>,
    stdout: Mutex<Stdout>,
    stderr: Mutex<Stderr>,
}

impl StdHost {
    pub fn new() -> Self {
        Self {
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
            stdout: Mutex::new(tokio::io::stdout()),
            stderr: Mutex::new(tokio::io::stderr()),
        }
    }
}

impl Default for StdHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Host for StdHost {
    async fn probe(&self, path: &Path) -> Result<PathKind, HostError> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(PathKind::File),
            Ok(meta) if meta.is_dir() => Ok(PathKind::Dir),
            // Sockets, fifos and friends classify the same as missing.
            Ok(_) => Ok(PathKind::None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PathKind::None),
            Err(e) => Err(e.into()),
        }
    }

    async fn read(&self, path: &Path) -> Result<String, HostError> {
        tokio::fs::read_to_string(path).await.map_err(Into::into)
    }

    async fn write(&self, text: &str) -> Result<(), HostError> {
        let mut out = self.stdout.lock().await;
        out.write_all(text.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }

    async fn warn(&self, text: &str) -> Result<(), HostError> {
        let mut err = self.stderr.lock().await;
        err.write_all(text.as_bytes()).await?;
        err.write_all(b"\n").await?;
        err.flush().await?;
        Ok(())
    }

    async fn ask(&self, prompt: &str) -> Result<String, HostError> {
        {
            let mut out = self.stdout.lock().await;
            out.write_all(prompt.as_bytes()).await?;
            out.flush().await?;
        }
        let mut line = String::new();
        let bytes = self.stdin.lock().await.read_line(&mut line).await?;
        if bytes == 0 {
            return Err(HostError::StreamClosed);
        }
        Ok(strip_line_terminator(line))
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

// ---------------------------------------------------------------------------
// InlineSourceHost
// ---------------------------------------------------------------------------

/// Host decorator for Eval mode: reads of the synthetic pseudo-file resolve
/// to the inline command-line code verbatim, even when a real file of that
/// name exists. Every other operation delegates to the wrapped host.
pub struct InlineSourceHost<'a, H> {
    inner: &'a H,
    inline_code: String,
}

impl<'a, H: Host> InlineSourceHost<'a, H> {
    pub fn new(inner: &'a H, inline_code: impl Into<String>) -> Self {
        Self {
            inner,
            inline_code: inline_code.into(),
        }
    }
}

#[async_trait]
impl<H: Host> Host for InlineSourceHost<'_, H> {
    async fn probe(&self, path: &Path) -> Result<PathKind, HostError> {
        self.inner.probe(path).await
    }

    async fn read(&self, path: &Path) -> Result<String, HostError> {
        if path.file_name() == Some(OsStr::new(EVAL_PSEUDO_FILE)) {
            return Ok(self.inline_code.clone());
        }
        self.inner.read(path).await
    }

    async fn write(&self, text: &str) -> Result<(), HostError> {
        self.inner.write(text).await
    }

    async fn warn(&self, text: &str) -> Result<(), HostError> {
        self.inner.warn(text).await
    }

    async fn ask(&self, prompt: &str) -> Result<String, HostError> {
        self.inner.ask(prompt).await
    }
}
