//! Core utilities for the Luau binding generator.
//!
//! This crate provides the naming conventions, text formatting helpers and
//! file plumbing shared by the other `luagd-bindgen` crates.

mod codegen;
mod file;
mod indent;
mod naming;
mod version;

pub use codegen::{Codegen, GenerateResult, PreviewFile};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Text formatting
pub use indent::{Indent, SourceBuffer, indent_block};
// Identifier casing
pub use naming::{canonical_enum_name, to_camel_case, to_pascal_case};
pub use version::Version;
