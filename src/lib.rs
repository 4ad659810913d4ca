//! Library crate root re-exporting configuration, credential and runtime modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod runtime;
