//! Core module for catalog data, planning and requirement progress

pub mod catalog;
pub mod config;
pub mod models;
pub mod planner;
pub mod requirements;
pub mod transfer;

/// Returns the current version of the `DegreePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
