//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the compilation pipeline.
///
/// Plugins are called before and after each phase and may inspect or modify
/// the compilation context.
///
/// # Example
///
/// ```ignore
/// struct PhaseLog;
///
/// impl Plugin for PhaseLog {
///     fn name(&self) -> &'static str { "phase-log" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         eprintln!("{phase}: {} diagnostic(s)", ctx.diagnostics.len());
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
