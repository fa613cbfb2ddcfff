//! Invocation-mode dispatch over the raw argument vector.
//!
//! The grammar predates this driver and is a compatibility surface, so the
//! scan is hand-rolled: one pass, left to right, with an internal scan state
//! that is distinct from the resolved [`InvocationMode`]. Malformed `-c`/`-e`
//! invocations resolve to [`InvocationMode::Help`] rather than erroring. A
//! first token that happens to equal a flag string (a file literally named
//! `-v`) dispatches as the flag; `-- <file>` is the escape hatch.

/// Execution mode resolved from the argument vector.
///
/// Exactly one mode is live per process run, immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Interactive read-eval-print loop.
    Repl,
    /// Print version information.
    Version,
    /// Compile a file to bytecode.
    Compile,
    /// Evaluate inline code supplied on the command line.
    Eval,
    /// Run a script file.
    Run,
    /// Print usage text.
    Help,
}

/// Immutable result of scanning the argument vector once.
///
/// Fields not relevant to the resolved mode stay unset.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub mode: InvocationMode,
    /// Script path for Run, input file for Compile.
    pub primary_path: Option<String>,
    /// Source text for Eval.
    pub inline_code: Option<String>,
    /// Residual arguments handed to the shell/extension layer.
    pub script_args: Vec<String>,
}

impl ParsedInvocation {
    fn help() -> Self {
        Self {
            mode: InvocationMode::Help,
            primary_path: None,
            inline_code: None,
            script_args: Vec::new(),
        }
    }
}

enum ScanState {
    Start,
    AfterVersion,
    CompilePath,
    EvalCode,
    ForceRun,
    ScriptArgs,
}

/// Resolve the argument vector (program name excluded) into exactly one
/// invocation. Pure computation: no I/O, no process state.
pub fn parse_invocation(args: &[String]) -> ParsedInvocation {
    let mut state = ScanState::Start;
    let mut mode = InvocationMode::Repl;
    let mut primary_path: Option<String> = None;
    let mut inline_code: Option<String> = None;
    let mut script_args: Vec<String> = Vec::new();

    for arg in args {
        match state {
            ScanState::Start => match arg.as_str() {
                "-v" => {
                    mode = InvocationMode::Version;
                    state = ScanState::AfterVersion;
                }
                "-c" => {
                    mode = InvocationMode::Compile;
                    state = ScanState::CompilePath;
                }
                "-e" => {
                    mode = InvocationMode::Eval;
                    state = ScanState::EvalCode;
                }
                "--" => state = ScanState::ForceRun,
                "-h" | "--help" => return ParsedInvocation::help(),
                _ => {
                    mode = InvocationMode::Run;
                    primary_path = Some(arg.clone());
                    state = ScanState::ScriptArgs;
                }
            },
            // Anything trailing `-v` downgrades the invocation to help.
            ScanState::AfterVersion => return ParsedInvocation::help(),
            ScanState::CompilePath => {
                if primary_path.is_none() {
                    primary_path = Some(arg.clone());
                } else {
                    return ParsedInvocation::help();
                }
            }
            ScanState::EvalCode => {
                if inline_code.is_none() {
                    inline_code = Some(arg.clone());
                } else {
                    script_args.push(arg.clone());
                }
            }
            ScanState::ForceRun => {
                mode = InvocationMode::Run;
                primary_path = Some(arg.clone());
                state = ScanState::ScriptArgs;
            }
            ScanState::ScriptArgs => script_args.push(arg.clone()),
        }
    }

    // Missing operands resolve to help, never a crash and never a half-run.
    // A bare `--` leaves mode at Repl, matching the historical driver.
    match mode {
        InvocationMode::Compile if primary_path.is_none() => ParsedInvocation::help(),
        InvocationMode::Eval if inline_code.is_none() => ParsedInvocation::help(),
        _ => ParsedInvocation {
            mode,
            primary_path,
            inline_code,
            script_args,
        },
    }
}
