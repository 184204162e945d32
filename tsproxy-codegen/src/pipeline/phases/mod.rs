//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the model and collects diagnostics
//! - [`AnalyzePhase`] - computes shared data from the model

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    DanglingTypeRefLint, EmptyControllerLint, Lint, LintInfo, SingleBodyLint, UrlPlaceholderLint,
    ValidatePhase,
};
