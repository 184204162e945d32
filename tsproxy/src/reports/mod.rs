//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use list::{ActionEntry, ControllerEntry, ListReport, ModuleEntry};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};

use tsproxy_codegen::pipeline::Diagnostic;

/// Diagnostic message with its location on a continuation line.
pub(crate) fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
