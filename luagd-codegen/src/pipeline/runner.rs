//! Pipeline orchestrator.

use eyre::Result;
use luagd_bindgen_manifest::ExtensionApi;

use super::{
    CodegenOptions, CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, analyze) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::with_options(CodegenOptions::from(&config.bindgen))
///     .plugin(PhaseLog);
///
/// let mut ctx = pipeline.run(api)?;
/// let ir = ctx.take_ir()?;
/// ```
pub struct Pipeline {
    options: CodegenOptions,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(CodegenOptions::default())
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        Self {
            options,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Describe every phase in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.info())
            .collect()
    }

    /// Run the pipeline on a parsed API.
    ///
    /// # Errors
    ///
    /// Returns an error if validation reports errors or any phase fails
    /// fatally. Diagnostics recorded before the failure are lost with the
    /// context; use [`Pipeline::run_collecting`] to keep them.
    pub fn run(&self, api: ExtensionApi) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(api, self.options.clone());
        self.run_phases(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline, returning the context even when a phase fails.
    pub fn run_collecting(&self, api: ExtensionApi) -> (CompilationContext, Result<()>) {
        let mut ctx = CompilationContext::new(api, self.options.clone());
        let result = self.run_phases(&mut ctx);
        (ctx, result)
    }

    fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(AnalyzePhase),
        ]
    }

    fn run_phases(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin_phases = Self::builtin_phases();

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
