//! Client execution and process exit handling.
pub mod executor;
mod startup;

pub use executor::{
    exit_code_for, run_client, ClientCommand, ClientEnvironment, DEFAULT_CLIENT_PROGRAM,
};
pub use startup::{run_client_with_profile, RuntimeExit};
