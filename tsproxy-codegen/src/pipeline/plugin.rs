//! Pipeline plugin trait and the built-in trace plugin.

use std::sync::{Mutex, MutexGuard, PoisonError};

use eyre::Result;

use super::{CompilationContext, Diagnostic};

/// A plugin that can hook into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the compilation context.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}

/// Logs each finished phase together with the diagnostics it produced.
#[derive(Debug, Default)]
pub struct TracePlugin {
    /// Diagnostic count when the current phase started.
    start: Mutex<usize>,
}

impl TracePlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics recorded since the last `on_before_phase`.
    pub fn produced<'c>(&self, ctx: &'c CompilationContext) -> &'c [Diagnostic] {
        let start = (*self.start()).min(ctx.diagnostics.len());
        &ctx.diagnostics[start..]
    }

    fn start(&self) -> MutexGuard<'_, usize> {
        self.start.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Plugin for TracePlugin {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn on_before_phase(&self, _phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        *self.start() = ctx.diagnostics.len();
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let produced = self.produced(ctx);
        for diag in produced {
            tracing::trace!(phase, %diag, "diagnostic");
        }
        let warnings = produced.iter().filter(|d| d.severity.is_warning()).count();
        tracing::debug!(
            phase,
            produced = produced.len(),
            warnings,
            total = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}
