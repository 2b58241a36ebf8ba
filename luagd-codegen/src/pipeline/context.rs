//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use luagd_bindgen_ir::BindingsIR;
use luagd_bindgen_manifest::ExtensionApi;

use super::{
    CodegenOptions,
    diagnostic::{Diagnostic, Severity},
};
use crate::computed::ComputedData;

/// Context passed through all pipeline phases.
///
/// Carries the state of one run, accumulating the lowered bindings, the
/// statistics and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed API being compiled.
    pub api: ExtensionApi,
    /// Options shared by all phases.
    pub options: CodegenOptions,
    /// The lowered bindings (populated by LowerPhase).
    pub ir: Option<BindingsIR>,
    /// Binding statistics (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(api: ExtensionApi, options: CodegenOptions) -> Self {
        Self {
            api,
            options,
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the bindings out of the context.
    ///
    /// Fails if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Result<BindingsIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("bindings not lowered - did LowerPhase run?"))
    }

    /// Take the statistics out of the context.
    ///
    /// Fails if AnalyzePhase has not run.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("statistics not computed - did AnalyzePhase run?"))
    }
}
