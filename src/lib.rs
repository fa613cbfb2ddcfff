//! Sink: command-line driver for an embeddable scripting engine.
//!
//! This crate owns everything between `main` and the engine: argument
//! resolution, the host I/O services, the interactive prompt protocol,
//! module search paths, and exit-code settlement. The engine itself is
//! supplied by the embedder through the [`engine::Engine`] trait.
//!
//! # Quick start
//!
//! ```no_run
//! use async_trait::async_trait;
//! use sink_cli::engine::{Engine, Outcome};
//! use sink_cli::host::Host;
//! use sink_cli::repl::LineSource;
//! use std::path::{Path, PathBuf};
//! use std::process::ExitCode;
//!
//! struct MyEngine;
//!
//! #[async_trait]
//! impl Engine for MyEngine {
//!     type Extension = ();
//!
//!     async fn interactive(
//!         &self,
//!         _lines: &mut dyn LineSource,
//!         _host: &dyn Host,
//!         _extensions: &[()],
//!         _search_paths: &[PathBuf],
//!     ) -> Outcome {
//!         Outcome::Pass
//!     }
//!
//!     async fn one_shot(
//!         &self,
//!         _script: &Path,
//!         _host: &dyn Host,
//!         _extensions: &[()],
//!         _search_paths: &[PathBuf],
//!     ) -> Outcome {
//!         Outcome::Pass
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> ExitCode {
//!     sink_cli::init_tracing();
//!     let argv: Vec<String> = std::env::args().skip(1).collect();
//!     sink_cli::runtime::run(&MyEngine, argv, |_| Vec::new()).await
//! }
//! ```

pub mod build_info;
pub mod cli;
pub mod engine;
pub mod error;
pub mod host;
pub mod paths;
pub mod repl;
pub mod runtime;
#[cfg(test)]
pub mod testsupport;

use tracing_subscriber::EnvFilter;

/// Install the diagnostic subscriber: `RUST_LOG`-style filtering, plain
/// formatting, everything on the error stream so script output stays clean.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
