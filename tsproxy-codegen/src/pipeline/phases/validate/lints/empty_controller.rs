//! Lint for controllers without actions.

use tsproxy_model::ApiDescriptionModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about controllers that expose no actions.
pub struct EmptyControllerLint;

impl Lint for EmptyControllerLint {
    fn name(&self) -> &'static str {
        "empty-controller"
    }

    fn description(&self) -> &'static str {
        "Controllers expose at least one action"
    }

    fn check(&self, model: &ApiDescriptionModel, diagnostics: &mut Vec<Diagnostic>) {
        for (module, controller) in model.controllers() {
            if controller.actions.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("controller '{}' has no actions", controller.name),
                    )
                    .at(format!("{}.{}", module.name, controller.name)),
                );
            }
        }
    }
}
