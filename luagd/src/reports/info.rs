//! Info command report.

use std::path::PathBuf;

use luagd_bindgen_codegen::ComputedData;

use super::{
    output::{Output, Report},
    stats::render_stats,
};

/// Report data about an API dump and the bindings it produces.
#[derive(Debug)]
pub struct InfoReport {
    pub api_path: PathBuf,
    /// Engine version (e.g., "4.1.0").
    pub version: Option<String>,
    /// Full engine build name from the dump header.
    pub full_name: Option<String>,
    pub output_dir: PathBuf,
    pub computed: ComputedData,
    pub phases: Vec<(String, String)>,
    pub lints: Vec<(String, String)>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        let title = self.full_name.as_deref().unwrap_or("Godot extension API");
        out.preformatted(&format!("  {}", title));
        out.preformatted(&format!("  {}", "─".repeat(title.chars().count())));
        out.newline();

        out.preformatted(&format!(
            "  Version     {}",
            self.version.as_deref().unwrap_or("unknown")
        ));
        out.preformatted(&format!("  API         {}", self.api_path.display()));
        out.preformatted(&format!("  Output      {}", self.output_dir.display()));
        out.newline();

        out.preformatted("  Bindings");
        out.preformatted("  ────────");
        out.preformatted(&render_stats(&self.computed, 1));
        out.newline();

        out.section("Pipeline phases");
        for (i, (name, description)) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", name, description));
        }
        out.newline();

        out.section("Lints");
        for (name, description) in &self.lints {
            out.list_item(&format!("{}: {}", name, description));
        }
    }
}
