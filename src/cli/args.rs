//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use super::{resolve_config_overrides, resolve_executable, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    RunClient(LaunchProfile),
    List(ListRequest),
}

/// Arguments for `--list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub config_overrides: Option<Vec<PathBuf>>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Run the nova client with credentials from a named environment",
    long_about = "Run the nova client with credentials from a named environment.\n\nEnvironments are sections of the first existing file among ./.supernova, ~/.supernova and $XDG_CONFIG_HOME/supernova. Options starting with nova_, os_ or novaclient are exported (upper-cased) to the client.",
    after_help = "Hint: use `supernova --list` to see the environments defined in your configuration file."
)]
pub struct LaunchArgs {
    /// Environment (configuration section) to load.
    #[arg(required_unless_present = "list")]
    pub environment: Option<String>,
    /// Arguments forwarded verbatim to the client.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub client_args: Vec<String>,
    /// Configuration file candidate; repeat to add more (later entries win).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Vec<PathBuf>,
    /// Client executable to run instead of `nova`.
    #[arg(short = 'x', long = "executable", value_name = "NAME")]
    pub executable: Option<String>,
    /// List configured environments and exit (cannot be combined with an environment).
    #[arg(
        short = 'l',
        long = "list",
        default_value_t = false,
        conflicts_with_all = ["environment", "client_args"]
    )]
    pub list: bool,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn build(self) -> Result<LaunchProfile> {
        let environment = self
            .environment
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| anyhow!("an environment name is required (see `supernova --list`)"))?;

        Ok(LaunchProfile {
            environment,
            client_args: self.client_args,
            executable: resolve_executable(self.executable),
            config_overrides: resolve_config_overrides(self.config),
        })
    }

    /// Parse CLI args into either client mode or listing mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        if self.list {
            return Ok(ParsedCommand::List(ListRequest {
                config_overrides: resolve_config_overrides(self.config),
            }));
        }
        Ok(ParsedCommand::RunClient(self.build()?))
    }
}
