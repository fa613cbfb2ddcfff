//! Module search-path computation and script-path absolutization.

use crate::error::HostError;
use std::env;
use std::path::{Path, PathBuf};

/// Compute the read-only module search-path list handed to the engine's
/// loader: the current working directory for interactive sessions, the
/// literal relative marker for one-shot modes.
// TODO: extend the list from a SINK_PATH environment variable.
pub fn module_search_paths(interactive: bool) -> Result<Vec<PathBuf>, HostError> {
    if interactive {
        Ok(vec![env::current_dir()?])
    } else {
        Ok(vec![PathBuf::from(".")])
    }
}

/// Join a relative script path onto the current working directory; absolute
/// paths pass through untouched.
pub fn absolutize(path: &str) -> Result<PathBuf, HostError> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
