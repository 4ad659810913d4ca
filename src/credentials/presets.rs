//! Detection of credential variables already exported by the invoking shell.
use std::env;

use tracing::warn;

/// Variable prefixes that can clash with injected credentials.
const PRESET_PREFIXES: [&str; 2] = ["NOVA_", "OS_"];

/// Return the sorted names among `vars` that start with `NOVA_` or `OS_`.
pub fn find_environment_presets<I, K, V>(vars: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    let mut presets = vars
        .into_iter()
        .map(|(key, _)| key.into())
        .filter(|key| PRESET_PREFIXES.iter().any(|prefix| key.starts_with(prefix)))
        .collect::<Vec<_>>();
    presets.sort();
    presets
}

/// Warn once about presets in the process environment.
pub fn warn_on_environment_presets() {
    let presets = find_environment_presets(
        env::vars_os().map(|(key, value)| (key.to_string_lossy().into_owned(), value)),
    );
    if presets.is_empty() {
        return;
    }

    warn!(
        target: "supernova::credentials",
        presets = ?presets,
        "Found existing environment variables that may cause conflicts: {}",
        presets.join(", ")
    );
}
