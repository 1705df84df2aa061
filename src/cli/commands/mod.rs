//! CLI command handlers for `DegreePlanner`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod requirements;
pub mod transfer;
