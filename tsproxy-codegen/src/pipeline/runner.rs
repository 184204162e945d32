//! Pipeline orchestrator.

use eyre::Result;
use tsproxy_model::ApiDescriptionModel;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, analyze) followed by any user
/// phases, calling plugin hooks before and after each one.
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(TracePlugin::new())
///     .run(model)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self::with_validate(ValidatePhase::new())
    }

    /// Create a pipeline with a custom validate phase.
    pub fn with_validate(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a model.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including validation
    /// recording an error diagnostic.
    pub fn run(&self, model: ApiDescriptionModel) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(model);
        self.run_context(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Unlike [`Pipeline::run`], the context (and its diagnostics) stays
    /// available to the caller when a phase fails.
    pub fn run_context(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 2] = [&self.validate, &AnalyzePhase];
        let user = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin.into_iter().chain(user) {
            self.run_phase(phase, ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, description = phase.description(), "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use tsproxy_model::{
        ActionDescriptor, BindingSource, ControllerDescriptor, ModuleDescriptor,
        ParameterDescriptor, TypeDescriptor,
    };

    use super::*;
    use crate::pipeline::TracePlugin;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MarkerPhase;

    impl Phase for MarkerPhase {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn description(&self) -> &'static str {
            "Record an info diagnostic"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            ctx.add_info("marker", "ran after analyze");
            Ok(())
        }
    }

    fn make_test_model() -> ApiDescriptionModel {
        ApiDescriptionModel::new().module(
            ModuleDescriptor::new("Sales").controller(
                ControllerDescriptor::new("Orders")
                    .action(ActionDescriptor::new("GetOrders", "orders")),
            ),
        )
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_model())
            .expect("pipeline should succeed");

        let computed = ctx.computed.as_ref().unwrap();
        assert_eq!(computed.action_count, 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .phase(MarkerPhase)
            .run(make_test_model())
            .expect("pipeline should succeed");

        // 2 built-in phases + 1 user phase
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_trace_plugin_leaves_context_untouched() {
        let ctx = Pipeline::new()
            .plugin(TracePlugin::new())
            .phase(MarkerPhase)
            .run(make_test_model())
            .expect("pipeline should succeed");

        assert!(ctx.computed.is_some());
        let markers: Vec<_> = ctx.diagnostics.iter().filter(|d| d.phase == "marker").collect();
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_user_phase_sees_computed_data() {
        let ctx = Pipeline::new()
            .phase(MarkerPhase)
            .run(make_test_model())
            .unwrap();
        assert!(ctx.computed.is_some());
        assert!(ctx.diagnostics.iter().any(|d| d.phase == "marker"));
    }

    #[test]
    fn test_run_context_keeps_diagnostics_on_failure() {
        let model = ApiDescriptionModel::new().module(
            ModuleDescriptor::new("Sales").controller(
                ControllerDescriptor::new("Orders").action(
                    ActionDescriptor::new("CreateOrder", "orders")
                        .param(ParameterDescriptor::new(
                            "a",
                            TypeDescriptor::primitive("String"),
                            BindingSource::Body,
                        ))
                        .param(ParameterDescriptor::new(
                            "b",
                            TypeDescriptor::primitive("String"),
                            BindingSource::Body,
                        )),
                ),
            ),
        );

        let mut ctx = CompilationContext::new(model);
        assert!(Pipeline::new().run_context(&mut ctx).is_err());
        assert_eq!(ctx.error_count(), 1);
        assert!(ctx.computed.is_none());
    }
}
