//! Core operations.
//!
//! Business logic for luagd commands, separated from CLI argument parsing
//! and output rendering.

pub mod check;
pub mod generate;
pub mod info;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use info::info;
use luagd_bindgen_codegen::pipeline::{Diagnostic, Severity};

use crate::reports::DiagnosticSummary;

/// Group diagnostics by severity, appending their location.
pub(crate) fn summarize(diagnostics: &[Diagnostic]) -> DiagnosticSummary {
    let mut summary = DiagnosticSummary::default();

    for diag in diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };

        match diag.severity {
            Severity::Error => summary.errors.push(msg),
            Severity::Warning => summary.warnings.push(msg),
            Severity::Info => summary.infos.push(msg),
        }
    }

    summary
}
