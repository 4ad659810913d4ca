//! Locate and load the credentials file.
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use ini::{Ini, ParseOption};
use tracing::{debug, error, info};

use crate::lib::errors::{ConfigError, CredentialError};

pub mod locator;
pub mod telemetry;

pub use locator::resolve_config_path;

/// Key/value pairs of one environment section, verbatim from the file.
pub type Section = BTreeMap<String, String>;

/// Quotes and backslashes are left for the credential extractor to see as written.
const VERBATIM_PARSE: ParseOption = ParseOption {
    enabled_quote: false,
    enabled_escape: false,
};

/// Parsed credentials file: section name → key → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: BTreeMap<String, Section>,
    source_path: PathBuf,
}

impl ConfigDocument {
    /// Build a document from already parsed sections.
    pub fn new(sections: BTreeMap<String, Section>, source_path: PathBuf) -> Self {
        Self {
            sections,
            source_path,
        }
    }

    /// Resolve the most specific candidate file and load it.
    pub fn discover(override_paths: Option<&[PathBuf]>) -> Result<Self, ConfigError> {
        let path = resolve_config_path(override_paths)?;
        telemetry::log_resolved(&path, override_paths.is_some());
        Self::load_from_path(path)
    }

    /// Load an INI document from a specific path.
    ///
    /// Section names, keys and values keep their casing and quoting.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "supernova::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let raw = Ini::load_from_file_opt(&path, VERBATIM_PARSE).map_err(|err| {
            let error = match err {
                ini::Error::Io(source) => ConfigError::from_read_error(path.clone(), source),
                ini::Error::Parse(source) => ConfigError::from_parse_error(path.clone(), source),
            };
            error!(
                target: "supernova::config",
                path = %path.display(),
                reason = %error,
                "Failed to load configuration file"
            );
            error
        })?;

        let config = Self::from_raw(&raw, path);
        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: &Ini, path: PathBuf) -> Self {
        let mut sections = BTreeMap::<String, Section>::new();
        for (name, properties) in raw {
            let Some(name) = name else {
                for (key, _) in properties.iter() {
                    debug!(
                        target: "supernova::config",
                        key = %key,
                        "Skipping entry outside of any section"
                    );
                }
                continue;
            };

            if sections.contains_key(name) {
                debug!(
                    target: "supernova::config",
                    section = %name,
                    "Merging repeated section"
                );
            }
            let section = sections.entry(name.to_string()).or_default();
            for (key, value) in properties.iter() {
                section.insert(key.to_string(), value.to_string());
            }
        }

        Self::new(sections, path)
    }

    /// Path the document was read from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Section names, sorted.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Sections with their names, sorted by name.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Look up a section by its exact name.
    pub fn section(&self, name: &str) -> Result<&Section, CredentialError> {
        self.sections
            .get(name)
            .ok_or_else(|| CredentialError::UnknownEnvironment {
                name: name.to_string(),
                available: self.environments().map(str::to_string).collect(),
            })
    }
}
