use std::{env, io, process::ExitCode};

use anyhow::Error;

use crate::{
    cli::LaunchProfile,
    config::ConfigDocument,
    credentials::{self, load_environment},
    lib::telemetry::ClientRunSpan,
};

use super::executor::{exit_code_for, run_client, ClientCommand, ClientEnvironment};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Load the selected environment and run the client with it.
///
/// Returns the exit code the wrapper should terminate with, which mirrors the
/// client's own status.
pub fn run_client_with_profile(profile: &LaunchProfile) -> Result<ExitCode, RuntimeExit> {
    credentials::warn_on_environment_presets();

    let document = ConfigDocument::discover(profile.config_overrides.as_deref())
        .map_err(RuntimeExit::from_error)?;
    let credentials =
        load_environment(&document, &profile.environment).map_err(RuntimeExit::from_error)?;

    let command = ClientCommand {
        program: profile.executable.clone(),
        args: profile.client_args.clone(),
        environment: ClientEnvironment::merge(env::vars_os(), &credentials),
    };

    let span = ClientRunSpan::start(&profile.environment, &command.program, credentials.len());
    let stdout = io::stdout();
    let status = run_client(&command, &mut stdout.lock()).map_err(RuntimeExit::from_error)?;
    span.finish(status.code());

    Ok(ExitCode::from(exit_code_for(status)))
}
