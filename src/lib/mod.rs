//! Shared library modules providing error types, default paths, and telemetry initialization.

pub mod errors;
pub mod paths;
pub mod telemetry;
