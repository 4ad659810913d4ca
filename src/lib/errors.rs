use std::{io, path::PathBuf};

use ini::ParseError;
use thiserror::Error;

/// Errors that can occur while locating or reading the credentials file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicit override was given but it lists no paths.
    #[error("Config file override must list at least one path")]
    InvalidOverride,
    /// None of the candidate paths exists as a regular file.
    #[error("Couldn't find a valid configuration file to parse (searched: {})", display_candidates(.candidates))]
    NotFound { candidates: Vec<PathBuf> },
    /// Failed to open or read the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not valid INI.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl ConfigError {
    /// Helper to wrap an I/O failure as a read failure.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap an INI syntax error as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ParseError) -> Self {
        Self::Parse { path, source }
    }
}

/// Errors raised while selecting an environment from the document.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Environment `{name}` is not defined in the configuration file (available: {})", display_names(.available))]
    UnknownEnvironment {
        name: String,
        available: Vec<String>,
    },
}

/// Failures while launching or streaming the client process.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O failed while running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "<none>".to_string();
    }
    candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_names(names: &[String]) -> String {
    if names.is_empty() {
        return "<none>".to_string();
    }
    names.join(", ")
}
