//! CLI entrypoint module structure.
use anyhow::{Context, Result};
use serde::Serialize;

use crate::{config::ConfigDocument, credentials::credential_key_names};

pub mod args;
pub mod profile;

pub use args::{LaunchArgs, ListRequest, ParsedCommand};
pub use profile::{resolve_config_overrides, resolve_executable, LaunchProfile};

/// One environment in the `--list` payload. Values are never included.
#[derive(Debug, Serialize)]
struct EnvironmentSummary<'a> {
    name: &'a str,
    credential_keys: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ListPayload<'a> {
    config_path: String,
    environments: Vec<EnvironmentSummary<'a>>,
}

/// Execute `--list` and return a user-facing JSON payload.
pub fn execute_list(request: &ListRequest) -> Result<String> {
    let document = ConfigDocument::discover(request.config_overrides.as_deref())
        .context("failed to load configuration for --list")?;
    render_environment_list(&document)
}

fn render_environment_list(document: &ConfigDocument) -> Result<String> {
    let environments = document
        .sections()
        .map(|(name, section)| EnvironmentSummary {
            name,
            credential_keys: credential_key_names(section),
        })
        .collect::<Vec<_>>();

    let payload = ListPayload {
        config_path: document.source_path().to_string_lossy().to_string(),
        environments,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}
