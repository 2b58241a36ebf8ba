//! Binding resolution for the Luau binding generator.
//!
//! This crate turns a parsed `extension_api.json` into binding tables:
//!
//! - [`resolve`] - pure resolvers for enum prefixes, operators, accessors and
//!   methods
//! - [`pipeline`] - validate → lower → analyze phases with lints and
//!   diagnostics
//! - [`generator`] - writes the tables to `bindings.json` for the emitter

mod computed;
pub mod generator;
pub mod pipeline;
pub mod resolve;

pub use computed::ComputedData;
pub use generator::{BINDINGS_FILE, Generator};
