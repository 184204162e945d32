//! Lint for actions binding several parameters from the request body.

use tsproxy_model::{ApiDescriptionModel, BindingSource};

use super::{super::Lint, action_location};
use crate::pipeline::Diagnostic;

/// Lint that rejects actions with more than one Body parameter.
///
/// Only one value can travel as the request body, so such an action
/// cannot be called from the generated client.
pub struct SingleBodyLint;

impl Lint for SingleBodyLint {
    fn name(&self) -> &'static str {
        "single-body"
    }

    fn description(&self) -> &'static str {
        "Actions bind at most one parameter from the request body"
    }

    fn check(&self, model: &ApiDescriptionModel, diagnostics: &mut Vec<Diagnostic>) {
        for (module, controller, action) in model.actions() {
            let body: Vec<_> = action
                .parameters_from(BindingSource::Body)
                .map(|p| p.name.as_str())
                .collect();
            if body.len() > 1 {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "action '{}' ({}) binds {} parameters from the body: {}",
                            action.name,
                            action.url,
                            body.len(),
                            body.join(", ")
                        ),
                    )
                    .at(action_location(module, controller, action)),
                );
            }
        }
    }
}
