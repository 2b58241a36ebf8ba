//! Generator-facing traits shared by output backends.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for backends that turn binding tables into files.
pub trait Codegen {
    /// Backend identifier (e.g., "json")
    fn target(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were (re)written
    pub written: Vec<PathBuf>,
    /// Files already up to date
    pub unchanged: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
