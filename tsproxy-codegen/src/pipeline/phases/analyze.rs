//! Analyze phase - computes shared data from the model.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    schema::ComputedData,
};

/// Phase that computes [`ComputedData`] for the model.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute counts and reachable types"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_model(&ctx.model);
        tracing::debug!(
            modules = computed.module_count,
            controllers = computed.controller_count,
            actions = computed.action_count,
            types = computed.reachable_types.len(),
            "analyzed model"
        );

        let unreachable = computed.unreachable_count(&ctx.model);
        if unreachable > 0 {
            ctx.add_info(
                self.name(),
                format!("{unreachable} declared type(s) are not referenced by any action"),
            );
        }

        ctx.computed = Some(computed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tsproxy_model::{
        ActionDescriptor, ApiDescriptionModel, ComplexType, ControllerDescriptor,
        ModuleDescriptor, TypeDescriptor,
    };

    use super::*;

    #[test]
    fn test_analyze_phase() {
        let model = ApiDescriptionModel::new()
            .module(
                ModuleDescriptor::new("Sales").controller(
                    ControllerDescriptor::new("Orders").action(
                        ActionDescriptor::new("GetOrder", "orders/{id}")
                            .returns(TypeDescriptor::task(TypeDescriptor::complex("Order"))),
                    ),
                ),
            )
            .complex_type("Order", ComplexType::new("OrderDto"));
        let mut ctx = CompilationContext::new(model);

        AnalyzePhase.run(&mut ctx).expect("analyze should succeed");

        let computed = ctx.computed.as_ref().unwrap();
        assert_eq!(computed.reachable_types, ["Order"]);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_analyze_reports_unreferenced_types() {
        let model = ApiDescriptionModel::new().complex_type("Orphan", ComplexType::new("OrphanDto"));
        let mut ctx = CompilationContext::new(model);

        AnalyzePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.diagnostics.len(), 1);
        assert!(ctx.diagnostics[0].message.starts_with("1 declared type"));
    }
}
