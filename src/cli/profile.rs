//! LaunchProfile and executable/config override resolution.
use std::path::PathBuf;

use crate::runtime::DEFAULT_CLIENT_PROGRAM;

/// Resolved launch profile for running the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub environment: String,
    pub client_args: Vec<String>,
    pub executable: String,
    pub config_overrides: Option<Vec<PathBuf>>,
}

/// Resolve the client executable: CLI override → `nova`.
pub fn resolve_executable(executable_override: Option<String>) -> String {
    executable_override
        .and_then(|value| normalize_nonempty(&value))
        .unwrap_or_else(|| DEFAULT_CLIENT_PROGRAM.to_string())
}

/// Repeated `--config` flags become an override list; none means the default list.
pub fn resolve_config_overrides(paths: Vec<PathBuf>) -> Option<Vec<PathBuf>> {
    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}

fn normalize_nonempty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
