//! Check command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Diagnostics grouped by severity, already formatted.
#[derive(Debug, Default)]
pub struct DiagnosticSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl DiagnosticSummary {
    pub fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }
}

/// Report data from API validation.
#[derive(Debug)]
pub struct CheckReport {
    pub api_path: PathBuf,
    pub diagnostics: DiagnosticSummary,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.api_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.api_path.display(),
                self.diagnostics.errors.len()
            ));
        }
    }
}
