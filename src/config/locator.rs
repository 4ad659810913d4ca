//! Candidate path scanning for the credentials file.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::lib::{errors::ConfigError, paths::default_candidate_paths};

/// Resolve the most specific configuration file.
///
/// Candidates are ordered lowest priority first, so the list is scanned in
/// reverse and the first regular file wins. With the default list that means
/// `./.supernova`, then `~/.supernova`, then the XDG file.
pub fn resolve_config_path(override_paths: Option<&[PathBuf]>) -> Result<PathBuf, ConfigError> {
    let candidates = match override_paths {
        Some([]) => return Err(ConfigError::InvalidOverride),
        Some(paths) => paths.to_vec(),
        None => default_candidate_paths(),
    };

    find_most_specific(&candidates)
        .map(Path::to_path_buf)
        .ok_or(ConfigError::NotFound { candidates })
}

fn find_most_specific(candidates: &[PathBuf]) -> Option<&Path> {
    candidates.iter().rev().map(PathBuf::as_path).find(|path| {
        let exists = path.is_file();
        debug!(
            target: "supernova::config",
            path = %path.display(),
            exists,
            "Probed configuration candidate"
        );
        exists
    })
}
