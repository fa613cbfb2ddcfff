//! Interactive-session line source and prompt rendering.
//!
//! The engine pulls lines one at a time and decides when the session ends;
//! from this side the sequence is effectively infinite and non-restartable.

use crate::error::HostError;
use crate::host::Host;
use async_trait::async_trait;

/// Produces successive input lines for the engine's interactive session.
#[async_trait]
pub trait LineSource: Send {
    /// One line of input, suspending until it is available. `level` is the
    /// number of unterminated constructs currently open in the session,
    /// used only to render the continuation prompt.
    async fn line(&mut self, level: usize) -> Result<String, HostError>;
}

/// [`LineSource`] over the host's interactive query.
///
/// Owns the session line counter: starts at 1, advances by exactly one per
/// accepted line regardless of content, and never leaks into engine
/// semantics; it exists for prompt rendering only.
pub struct ReplLineSource<'a, H> {
    host: &'a H,
    line_number: u32,
}

impl<'a, H: Host> ReplLineSource<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self {
            host,
            line_number: 1,
        }
    }
}

#[async_trait]
impl<H: Host> LineSource for ReplLineSource<'_, H> {
    async fn line(&mut self, level: usize) -> Result<String, HostError> {
        let prompt = render_prompt(self.line_number, level);
        let mut answer = self.host.ask(&prompt).await?;
        self.line_number += 1;
        answer.push('\n');
        Ok(answer)
    }
}

/// Render the interactive prompt for `line_number` at nesting `level`.
///
/// Byte-exact compatibility surface: `": "` at top level, `level` copies of
/// `".."` followed by `". "` inside unterminated constructs, and a single
/// space padding line numbers below 10.
pub fn render_prompt(line_number: u32, level: usize) -> String {
    let body = if level == 0 {
        ": ".to_string()
    } else {
        format!("{}. ", "..".repeat(level))
    };
    if line_number < 10 {
        format!(" {line_number}{body}")
    } else {
        format!("{line_number}{body}")
    }
}
