//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the model and collects diagnostics
/// - `AnalyzePhase` - computes shared data from the model
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Non-fatal issues are recorded as diagnostics; an error aborts the pipeline.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
