//! Default candidate locations for the credentials file.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// File name used under the XDG config directory.
pub const XDG_CONFIG_FILE_NAME: &str = "supernova";
/// Dotfile name used in the home and current directories.
pub const DOTFILE_NAME: &str = ".supernova";
/// Environment variable name for the XDG config directory.
const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
/// Environment variable name for user home directory.
const HOME_ENV: &str = "HOME";

/// Build the default candidate list from the process environment.
///
/// Ordered from lowest to highest priority:
/// 1. `$XDG_CONFIG_HOME/supernova` (or `$HOME/.config/supernova`).
/// 2. `$HOME/.supernova`.
/// 3. `./.supernova`.
pub fn default_candidate_paths() -> Vec<PathBuf> {
    default_candidate_paths_from(env::var_os(XDG_CONFIG_HOME_ENV), env::var_os(HOME_ENV))
}

/// Build the default candidate list from explicit environment values (testable helper).
pub fn default_candidate_paths_from(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Vec<PathBuf> {
    let home = home.filter(|value| !value.is_empty()).map(PathBuf::from);
    let xdg_dir = xdg_config_home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.as_ref().map(|home| home.join(".config")));

    let mut candidates = Vec::with_capacity(3);
    if let Some(xdg_dir) = xdg_dir {
        candidates.push(xdg_dir.join(XDG_CONFIG_FILE_NAME));
    }
    if let Some(home) = home {
        candidates.push(home.join(DOTFILE_NAME));
    }
    candidates.push(Path::new(DOTFILE_NAME).to_path_buf());
    candidates
}
