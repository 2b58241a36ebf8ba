//! Compilation pipeline from a parsed API to binding tables.
//!
//! [`Pipeline`] runs the phases validate → lower → analyze over a shared
//! [`CompilationContext`], calling [`Plugin`] hooks around each phase and
//! collecting [`Diagnostic`]s along the way.
//!
//! # Example
//!
//! ```ignore
//! use luagd_bindgen_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(api)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let ir = ctx.take_ir()?;
//! Generator::new(&ir, true).generate(out_dir)?;
//! ```

mod context;
mod diagnostic;
mod options;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use options::CodegenOptions;
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
