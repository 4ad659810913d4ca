//! Credential extraction from a selected environment section.
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::{
    config::{ConfigDocument, Section},
    lib::errors::CredentialError,
};

pub mod presets;

pub use presets::{find_environment_presets, warn_on_environment_presets};

/// Key prefixes (lower case) that mark an option as a credential.
pub const CREDENTIAL_KEY_PREFIXES: [&str; 3] = ["nova_", "os_", "novaclient"];
/// Legacy option that only triggers a deprecation warning.
const DEPRECATED_INSECURE_OPTION: &str = "insecure";
const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Normalized credentials of one environment, keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    variables: BTreeMap<String, String>,
}

impl CredentialSet {
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Variable names, sorted.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}

/// Select `env_name` from the document and extract its credentials.
///
/// Only options starting with `nova_`, `os_` or `novaclient` (any case) are
/// kept. Keys are upper-cased and surrounding quotes are trimmed from keys
/// and values.
pub fn load_environment(
    doc: &ConfigDocument,
    env_name: &str,
) -> Result<CredentialSet, CredentialError> {
    let section = doc.section(env_name)?;

    if section
        .keys()
        .any(|key| key.eq_ignore_ascii_case(DEPRECATED_INSECURE_OPTION))
    {
        warn!(
            target: "supernova::credentials",
            environment = env_name,
            "the 'insecure' option is deprecated. Consider using NOVACLIENT_DEBUG=1 instead."
        );
    }

    let credentials = section
        .iter()
        .filter(|(key, _)| is_credential_key(key))
        .map(|(key, value)| normalize_pair(key, value))
        .collect::<CredentialSet>();

    debug!(
        target: "supernova::credentials",
        environment = env_name,
        options = section.len(),
        credentials = credentials.len(),
        "Extracted credentials"
    );
    Ok(credentials)
}

/// Whether `key` carries one of the recognized credential prefixes.
pub fn is_credential_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    CREDENTIAL_KEY_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

/// Sorted variable names `section` would export, without reading values.
pub fn credential_key_names(section: &Section) -> Vec<String> {
    section
        .keys()
        .filter(|key| is_credential_key(key))
        .map(|key| normalize_key(key))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn normalize_key(key: &str) -> String {
    key.to_uppercase().trim_matches(QUOTE_CHARS).to_string()
}

fn normalize_pair(key: &str, value: &str) -> (String, String) {
    (
        normalize_key(key),
        value.trim_matches(QUOTE_CHARS).to_string(),
    )
}
