//! Shared test fixtures for the host, prompt, and driver test modules.
//!
//! Keeping the scripted host and the recording engine here prevents each
//! test module from rebuilding ad-hoc mock and temp-dir code.

use crate::engine::{Engine, Outcome};
use crate::error::HostError;
use crate::host::{Host, PathKind};
use crate::repl::LineSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// This helper is intentionally simple and std-only so unit tests can use it
/// without introducing new dependencies.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("sink-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

// ---------------------------------------------------------------------------
// MockHost
// ---------------------------------------------------------------------------

/// Scripted in-memory [`Host`]: console writes are recorded, interactive
/// queries pop pre-seeded lines and report a closed stream once drained.
#[derive(Default)]
pub struct MockHost {
    written: Mutex<Vec<String>>,
    warned: Mutex<Vec<String>>,
    asked: Mutex<Vec<String>>,
    ask_lines: Mutex<VecDeque<String>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the answers returned by successive `ask` calls.
    pub fn with_ask_lines<I>(self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        {
            let mut queue = self.ask_lines.lock().unwrap();
            queue.extend(lines.into_iter().map(Into::into));
        }
        self
    }

    /// Lines written to the output stream, in order.
    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    /// Lines written to the error stream, in order.
    pub fn warned(&self) -> Vec<String> {
        self.warned.lock().unwrap().clone()
    }

    /// Prompts passed to `ask`, in order, including any that failed.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for MockHost {
    async fn probe(&self, _path: &Path) -> Result<PathKind, HostError> {
        Ok(PathKind::None)
    }

    async fn read(&self, path: &Path) -> Result<String, HostError> {
        Err(std::io::Error::new(
            ErrorKind::NotFound,
            format!("no fixture file at {}", path.display()),
        )
        .into())
    }

    async fn write(&self, text: &str) -> Result<(), HostError> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn warn(&self, text: &str) -> Result<(), HostError> {
        self.warned.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn ask(&self, prompt: &str) -> Result<String, HostError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.ask_lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(HostError::StreamClosed)
    }
}

// ---------------------------------------------------------------------------
// MockEngine
// ---------------------------------------------------------------------------

/// One recorded engine entry-point call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Interactive {
        lines: Vec<String>,
        extensions: Vec<String>,
        search_paths: Vec<PathBuf>,
    },
    OneShot {
        script: PathBuf,
        extensions: Vec<String>,
        search_paths: Vec<PathBuf>,
    },
}

/// Recording [`Engine`] that returns a fixed outcome from either entry point.
pub struct MockEngine {
    outcome: Outcome,
    pull_lines: usize,
    read_source: bool,
    calls: Mutex<Vec<EngineCall>>,
    read_sources: Mutex<Vec<String>>,
}

impl MockEngine {
    pub fn returning(outcome: Outcome) -> Self {
        Self {
            outcome,
            pull_lines: 0,
            read_source: false,
            calls: Mutex::new(Vec::new()),
            read_sources: Mutex::new(Vec::new()),
        }
    }

    /// Pull exactly `count` lines from the line source before finishing an
    /// interactive session.
    pub fn pulling_lines(mut self, count: usize) -> Self {
        self.pull_lines = count;
        self
    }

    /// Read the script source through the supplied host before finishing a
    /// one-shot run.
    pub fn reading_script_source(mut self) -> Self {
        self.read_source = true;
        self
    }

    /// Entry-point calls observed so far, in order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Script sources read through the host during one-shot runs.
    pub fn read_sources(&self) -> Vec<String> {
        self.read_sources.lock().unwrap().clone()
    }
}

#[async_trait]
impl Engine for MockEngine {
    type Extension = String;

    async fn interactive(
        &self,
        lines: &mut dyn LineSource,
        _host: &dyn Host,
        extensions: &[String],
        search_paths: &[PathBuf],
    ) -> Outcome {
        let mut pulled = Vec::new();
        for _ in 0..self.pull_lines {
            match lines.line(0).await {
                Ok(line) => pulled.push(line),
                Err(_) => break,
            }
        }
        self.calls.lock().unwrap().push(EngineCall::Interactive {
            lines: pulled,
            extensions: extensions.to_vec(),
            search_paths: search_paths.to_vec(),
        });
        self.outcome.clone()
    }

    async fn one_shot(
        &self,
        script: &Path,
        host: &dyn Host,
        extensions: &[String],
        search_paths: &[PathBuf],
    ) -> Outcome {
        if self.read_source {
            if let Ok(source) = host.read(script).await {
                self.read_sources.lock().unwrap().push(source);
            }
        }
        self.calls.lock().unwrap().push(EngineCall::OneShot {
            script: script.to_path_buf(),
            extensions: extensions.to_vec(),
            search_paths: search_paths.to_vec(),
        });
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[tokio::test]
    async fn mock_host_pops_scripted_lines_then_reports_closed_stream() {
        let host = MockHost::new().with_ask_lines(["one", "two"]);
        assert_eq!(host.ask("a: ").await.unwrap(), "one");
        assert_eq!(host.ask("b: ").await.unwrap(), "two");
        assert!(matches!(
            host.ask("c: ").await.unwrap_err(),
            HostError::StreamClosed
        ));
        assert_eq!(host.asked(), vec!["a: ", "b: ", "c: "]);
    }

    #[tokio::test]
    async fn mock_engine_records_one_shot_calls() {
        let engine = MockEngine::returning(Outcome::Fail);
        let host = MockHost::new();
        let outcome = engine
            .one_shot(Path::new("/tmp/x.sink"), &host, &["a".to_string()], &[])
            .await;
        assert_eq!(outcome, Outcome::Fail);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::OneShot {
                script: PathBuf::from("/tmp/x.sink"),
                extensions: vec!["a".to_string()],
                search_paths: Vec::new(),
            }]
        );
    }
}
