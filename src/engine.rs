//! Contract for the external scripting engine driven by this crate.
//!
//! The engine owns parsing and execution semantics; this crate only decides
//! which of the two entry points to call and what to hand them. Both entry
//! points are asynchronous and report a terminal [`Outcome`].

use crate::host::Host;
use crate::repl::LineSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Terminal result reported by an engine entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran to completion successfully.
    Pass,
    /// The program failed without a message of its own.
    Fail,
    /// The program failed with a diagnostic for the error stream.
    Diagnostic(String),
}

/// Entry points of the scripting engine.
///
/// Implemented by the embedding engine crate; this driver invokes exactly
/// one entry per process run. The extension list is opaque here; it is
/// built by the embedding shell layer and forwarded unmodified.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Opaque collaborator handed through to both entry points.
    type Extension: Send + Sync;

    /// Interactive session: the engine pulls lines from `lines` until its
    /// own terminal condition is met.
    async fn interactive(
        &self,
        lines: &mut dyn LineSource,
        host: &dyn Host,
        extensions: &[Self::Extension],
        search_paths: &[PathBuf],
    ) -> Outcome;

    /// One-shot execution of the script at `script` (absolute by the time
    /// it arrives here).
    async fn one_shot(
        &self,
        script: &Path,
        host: &dyn Host,
        extensions: &[Self::Extension],
        search_paths: &[PathBuf],
    ) -> Outcome;
}
