//! Driver orchestration and exit-code settlement.
//!
//! One invocation flows through here exactly once: resolve the argument
//! vector, construct the host services, call a single engine entry point
//! (or print an informational surface), and settle the process exit code.
//! Every failure is terminal for the invocation; nothing is retried.

use crate::build_info::{help_text, version_text};
use crate::cli::{parse_invocation, InvocationMode, ParsedInvocation};
use crate::engine::{Engine, Outcome};
use crate::error::HostError;
use crate::host::{Host, InlineSourceHost, StdHost, EVAL_PSEUDO_FILE};
use crate::paths::{absolutize, module_search_paths};
use crate::repl::ReplLineSource;
use std::process::ExitCode;
use tracing::debug;

const SUCCESS_CODE: u8 = 0;
const FAILURE_CODE: u8 = 1;

/// Drive one full invocation against the process's standard streams.
///
/// `argv` excludes the program name. `shell_extensions` is the embedding
/// shell layer's hook: it receives the residual script arguments and builds
/// the opaque extension list forwarded unmodified to the engine. The
/// returned code is meant to be returned straight from `main`.
pub async fn run<E, F>(engine: &E, argv: Vec<String>, shell_extensions: F) -> ExitCode
where
    E: Engine,
    F: FnOnce(&[String]) -> Vec<E::Extension>,
{
    let host = StdHost::new();
    run_with_host(engine, &host, argv, shell_extensions).await
}

/// [`run`] against a caller-supplied host, for embeddings that proxy their
/// own streams.
pub async fn run_with_host<E, H, F>(
    engine: &E,
    host: &H,
    argv: Vec<String>,
    shell_extensions: F,
) -> ExitCode
where
    E: Engine,
    H: Host,
    F: FnOnce(&[String]) -> Vec<E::Extension>,
{
    ExitCode::from(drive(engine, host, argv, shell_extensions).await)
}

async fn drive<E, H, F>(engine: &E, host: &H, argv: Vec<String>, shell_extensions: F) -> u8
where
    E: Engine,
    H: Host,
    F: FnOnce(&[String]) -> Vec<E::Extension>,
{
    let invocation = parse_invocation(&argv);
    debug!(mode = ?invocation.mode, "resolved invocation");
    match dispatch(engine, host, invocation, shell_extensions).await {
        Ok(code) => code,
        Err(e) => {
            // Driver-level host failure: report and fail. If even the error
            // stream is gone, the exit code is the only signal left.
            let _ = host.warn(&e.to_string()).await;
            FAILURE_CODE
        }
    }
}

async fn dispatch<E, H, F>(
    engine: &E,
    host: &H,
    invocation: ParsedInvocation,
    shell_extensions: F,
) -> Result<u8, HostError>
where
    E: Engine,
    H: Host,
    F: FnOnce(&[String]) -> Vec<E::Extension>,
{
    match invocation.mode {
        InvocationMode::Help => show_help(host).await,
        InvocationMode::Version => {
            host.write(&version_text()).await?;
            Ok(SUCCESS_CODE)
        }
        InvocationMode::Repl => {
            let search_paths = module_search_paths(true)?;
            let extensions = shell_extensions(&invocation.script_args);
            let mut lines = ReplLineSource::new(host);
            debug!("starting interactive session");
            let outcome = engine
                .interactive(&mut lines, host, &extensions, &search_paths)
                .await;
            Ok(settle(host, outcome).await)
        }
        InvocationMode::Run => {
            let Some(file) = invocation.primary_path else {
                return show_help(host).await;
            };
            let script = absolutize(&file)?;
            let search_paths = module_search_paths(false)?;
            let extensions = shell_extensions(&invocation.script_args);
            debug!(script = %script.display(), "running script");
            let outcome = engine
                .one_shot(&script, host, &extensions, &search_paths)
                .await;
            Ok(settle(host, outcome).await)
        }
        InvocationMode::Eval => {
            let Some(code) = invocation.inline_code else {
                return show_help(host).await;
            };
            let script = absolutize(EVAL_PSEUDO_FILE)?;
            let search_paths = module_search_paths(false)?;
            let extensions = shell_extensions(&invocation.script_args);
            let eval_host = InlineSourceHost::new(host, code);
            debug!("evaluating inline code");
            let outcome = engine
                .one_shot(&script, &eval_host, &extensions, &search_paths)
                .await;
            Ok(settle(host, outcome).await)
        }
        InvocationMode::Compile => {
            let Some(file) = invocation.primary_path else {
                return show_help(host).await;
            };
            // Bytecode output has no implementation yet; surface that as a
            // normal diagnostic instead of escaping the exit path.
            let outcome =
                Outcome::Diagnostic(format!("cannot compile {file}: not implemented"));
            Ok(settle(host, outcome).await)
        }
    }
}

async fn show_help<H: Host>(host: &H) -> Result<u8, HostError> {
    host.write(&help_text()).await?;
    Ok(SUCCESS_CODE)
}

/// Map an engine outcome to its process exit code. Pure counterpart of
/// [`settle`], the single place exit codes are decided.
pub fn exit_code(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Pass => SUCCESS_CODE,
        Outcome::Fail | Outcome::Diagnostic(_) => FAILURE_CODE,
    }
}

/// Settle the engine's terminal result: emit the diagnostic, if any, then
/// report the exit code. Diagnostic delivery is best-effort; a dead error
/// stream cannot improve on the failure code already being returned.
async fn settle<H: Host>(host: &H, outcome: Outcome) -> u8 {
    if let Outcome::Diagnostic(message) = &outcome {
        let _ = host.warn(message).await;
    }
    exit_code(&outcome)
}
