//! CLI command handlers for `reportcard`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod demo;
pub mod show;
