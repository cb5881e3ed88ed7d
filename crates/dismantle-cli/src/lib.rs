//! # dismantle-cli
//!
//! Command-line front end for the dismantling-procedure engine.
//!
//! - `generate`: ordered teardown steps plus summary for a manifest
//! - `classify`: the class derived for each component
//! - `catalog`: the standard rule set
//! - `config`: TOML configuration management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod render;

pub use config::DismantleConfig;
pub use error::{Error, Result};
