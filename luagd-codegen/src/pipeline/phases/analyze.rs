//! Analyze phase - computes binding statistics.

use eyre::{Result, eyre};

use crate::{
    computed::ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Phase that computes [`ComputedData`] from the lowered bindings.
///
/// Must run after `LowerPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute binding statistics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("bindings not lowered - AnalyzePhase must run after LowerPhase"))?;

        ctx.computed = Some(ComputedData::compute(&ctx.api, &ctx.options, ir));
        Ok(())
    }
}
