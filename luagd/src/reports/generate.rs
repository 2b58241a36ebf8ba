//! Generate command report.

use std::{path::PathBuf, time::Duration};

use luagd_bindgen_codegen::ComputedData;

use super::{
    check::DiagnosticSummary,
    output::{Output, Report},
    stats::render_stats,
};

/// Report data from binding generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub api_path: PathBuf,
    /// Engine version of the dump, if it has a header.
    pub version: Option<String>,
    pub diagnostics: DiagnosticSummary,
    /// Per-phase timings, collected with `--verbose`.
    pub timings: Vec<PhaseTiming>,
    /// Binding statistics; absent when the pipeline aborted.
    pub computed: Option<ComputedData>,
    pub result: GenerationResult,
}

/// How long one pipeline phase took.
#[derive(Debug, Clone)]
pub struct PhaseTiming {
    pub phase: String,
    pub elapsed: Duration,
    /// Diagnostics recorded once the phase finished.
    pub diagnostics: usize,
}

/// Result of binding generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
    /// The pipeline failed; nothing was generated.
    Aborted(String),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    /// Files left untouched because they were already up to date.
    pub unchanged: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.result, GenerationResult::Aborted(_))
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);

        if !self.timings.is_empty() {
            out.section("Phases");
            for timing in &self.timings {
                out.key_value_indented(
                    &timing.phase,
                    &format!(
                        "{:.2?}, {} diagnostic(s)",
                        timing.elapsed, timing.diagnostics
                    ),
                );
            }
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
            GenerationResult::Aborted(reason) => out.error(reason),
        }
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        let version = self.version.as_deref().unwrap_or("unknown version");
        out.preformatted(&format!("{} (Godot {})", self.api_path.display(), version));
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);

        if let Some(computed) = &self.computed {
            out.section("Bindings");
            out.preformatted(&render_stats(computed, 1));
            out.newline();
        }

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.unchanged {
            out.list_item(&format!("{} (unchanged)", path.display()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end());
        }

        out.divider("Summary");
        out.preformatted(&format!("{} file(s) would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            api_path: PathBuf::from("extension_api.json"),
            version: Some("4.1.0".into()),
            diagnostics: DiagnosticSummary::default(),
            timings: Vec::new(),
            computed: None,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("gen"),
            written: vec![PathBuf::from("gen/bindings.json")],
            unchanged: Vec::new(),
        }));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_success());
        assert_eq!(
            out.stdout,
            "extension_api.json (Godot 4.1.0)\n\nGenerated: gen\n  + gen/bindings.json\n"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "bindings.json".into(),
                content: "{}\n".into(),
            }],
        }));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            "── bindings.json ──\n{}\n── Summary ──\n1 file(s) would be generated\n"
        );
    }

    #[test]
    fn test_render_aborted() {
        let report = report(GenerationResult::Aborted(
            "validation failed with 1 error(s)".into(),
        ));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(out.stderr, "error: validation failed with 1 error(s)\n");
        assert!(out.stdout.is_empty());
    }
}
