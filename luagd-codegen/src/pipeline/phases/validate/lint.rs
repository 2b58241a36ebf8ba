//! Lint trait for API validation.

use luagd_bindgen_manifest::ExtensionApi;

use crate::pipeline::{CodegenOptions, Diagnostic};

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the API for issues the generator would paper over.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the API and push any diagnostics.
    fn check(
        &self,
        api: &ExtensionApi,
        options: &CodegenOptions,
        diagnostics: &mut Vec<Diagnostic>,
    );

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
