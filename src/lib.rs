//! Shared library for `DegreePlanner`
//! Contains the catalog, planner and requirement evaluation used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
