//! Entry point for supernova.
use std::process::ExitCode;

use clap::Parser;
use supernova::{
    cli::{execute_list, LaunchArgs, ListRequest, ParsedCommand},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunClient(profile) => runtime::run_client_with_profile(&profile),
        ParsedCommand::List(request) => handle_list(&request),
    }
}

fn handle_list(request: &ListRequest) -> Result<ExitCode, RuntimeExit> {
    let message = execute_list(request).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
