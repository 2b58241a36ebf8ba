//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the API and collects diagnostics
//! - [`LowerPhase`] - resolves names and tables into the binding IR
//! - [`AnalyzePhase`] - computes binding statistics

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::LowerPhase;
pub use validate::{
    EnumCollisionLint, Lint, LintInfo, MissingAccessorLint, UtilityAllowListLint, ValidatePhase,
};
