//! Generate operation - bindings from the API dump.

use std::{
    path::Path,
    sync::{Arc, Mutex},
    time::Instant,
};

use eyre::{Context, Result, eyre};
use luagd_bindgen_codegen::{
    Generator,
    pipeline::{CodegenOptions, CompilationContext, Pipeline, Plugin},
};
use luagd_bindgen_core::Codegen;
use luagd_bindgen_manifest::ApiFile;

use super::summarize;
use crate::reports::{
    GenerateReport, GenerationResult, PhaseTiming, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    pub pretty: bool,
    /// Preview without writing files.
    pub dry_run: bool,
    /// Record per-phase timings.
    pub verbose: bool,
}

/// Execute the generate operation.
///
/// Validation errors abort generation and are reported, not returned; only
/// I/O failures while writing are errors.
pub fn generate(
    api_file: ApiFile,
    options: CodegenOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let api_path = api_file.path().to_path_buf();
    let api = api_file.into_api();
    let version = api.version().map(|v| v.to_string());

    let timings = Arc::new(Mutex::new(Vec::new()));
    let mut pipeline = Pipeline::with_options(options);
    if opts.verbose {
        pipeline = pipeline.plugin(PhaseTimer::new(timings.clone()));
    }

    let (mut ctx, outcome) = pipeline.run_collecting(api);
    let diagnostics = summarize(&ctx.diagnostics);
    let timings = timings
        .lock()
        .map_err(|_| eyre!("phase timings poisoned"))?
        .clone();

    if let Err(err) = outcome {
        return Ok(GenerateReport {
            api_path,
            version,
            diagnostics,
            timings,
            computed: None,
            result: GenerationResult::Aborted(err.to_string()),
        });
    }

    let ir = ctx.take_ir()?;
    let computed = ctx.take_computed()?;
    let generator = Generator::new(&ir, opts.pretty);

    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write bindings")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    Ok(GenerateReport {
        api_path,
        version,
        diagnostics,
        timings,
        computed: Some(computed),
        result,
    })
}

/// Plugin that measures how long each phase takes.
struct PhaseTimer {
    started: Mutex<Option<Instant>>,
    timings: Arc<Mutex<Vec<PhaseTiming>>>,
}

impl PhaseTimer {
    fn new(timings: Arc<Mutex<Vec<PhaseTiming>>>) -> Self {
        Self {
            started: Mutex::new(None),
            timings,
        }
    }
}

impl Plugin for PhaseTimer {
    fn name(&self) -> &'static str {
        "phase-timer"
    }

    fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        let mut started = self
            .started
            .lock()
            .map_err(|_| eyre!("phase timer poisoned"))?;
        *started = Some(Instant::now());
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let started = self
            .started
            .lock()
            .map_err(|_| eyre!("phase timer poisoned"))?
            .take();

        if let Some(started) = started {
            self.timings
                .lock()
                .map_err(|_| eyre!("phase timings poisoned"))?
                .push(PhaseTiming {
                    phase: phase.to_string(),
                    elapsed: started.elapsed(),
                    diagnostics: ctx.diagnostics.len(),
                });
        }
        Ok(())
    }
}
