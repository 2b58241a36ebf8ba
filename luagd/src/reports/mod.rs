//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod check;
mod generate;
mod info;
mod output;
mod stats;

pub use check::{CheckReport, DiagnosticSummary};
pub use generate::{
    GenerateReport, GenerationResult, PhaseTiming, PreviewFile, PreviewResult, WrittenResult,
};
pub use info::InfoReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
