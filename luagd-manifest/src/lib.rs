//! Extension API parsing and validation for the Luau binding generator.
//!
//! Parses Godot's `extension_api.json` into typed descriptors, rejects
//! malformed dumps with source-located diagnostics, and loads the
//! generator's `luagd.toml` configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod api;
mod config;
mod error;
mod provider;

pub use api::*;
pub use config::{ApiConfig, BindgenConfig, CONFIG_FILE, Config, OutputConfig, parse_config};
pub use error::{Error, Result};
pub use provider::{SKIPPED_CLASSES, UTILITY_FUNCTIONS, UtilityFunction, utility_function};
