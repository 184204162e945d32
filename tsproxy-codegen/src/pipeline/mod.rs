//! Compilation pipeline run ahead of generation.
//!
//! The [`Pipeline`] validates an API description with lints, then computes
//! shared analysis data. It provides:
//!
//! - Explicit phase boundaries (validate → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use tsproxy_codegen::pipeline::{Pipeline, TracePlugin};
//!
//! let ctx = Pipeline::new().plugin(TracePlugin::new()).run(model)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracePlugin};
pub use runner::Pipeline;
