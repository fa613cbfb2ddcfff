//! Compile-time build metadata and the informational CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("SINK_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("SINK_BUILD_TIMESTAMP");

/// Render the version block printed by `sink -v`.
pub fn version_text() -> String {
    format!("sink {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

/// Render the help text: the version block followed by the usage table.
pub fn help_text() -> String {
    format!(
        "{}\n\n\
         Usage:\n\
         \x20 sink                           Read-eval-print loop\n\
         \x20 sink <file> [arguments]        Run file with arguments\n\
         \x20 sink -e '<code>' [arguments]   Run '<code>' with arguments\n\
         \x20 sink -- <file> [arguments]     Run file whose name begins with a dash\n\
         \x20 sink -c <file>                 Compile file to bytecode\n\
         \x20 sink -v                        Print version information\n\
         \x20 sink -h, --help                Print this help text",
        version_text()
    )
}
