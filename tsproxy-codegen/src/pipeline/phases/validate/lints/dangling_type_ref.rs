//! Lint for complex references without a type table entry.

use tsproxy_model::ApiDescriptionModel;

use super::{super::Lint, action_location};
use crate::{
    pipeline::Diagnostic,
    schema::{signature_types, visit_complex_refs},
};

/// Lint that warns about references to complex types missing from `types`.
///
/// Generation still succeeds; such a reference becomes an empty class.
pub struct DanglingTypeRefLint;

impl Lint for DanglingTypeRefLint {
    fn name(&self) -> &'static str {
        "dangling-type-ref"
    }

    fn description(&self) -> &'static str {
        "Every referenced complex type is declared in the type table"
    }

    fn check(&self, model: &ApiDescriptionModel, diagnostics: &mut Vec<Diagnostic>) {
        let mut report = |id: &str, location: String| {
            if model.complex(id).is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("type '{id}' is not declared and is emitted as an empty class"),
                    )
                    .at(location),
                );
            }
        };

        for (module, controller, action) in model.actions() {
            for ty in signature_types(action) {
                visit_complex_refs(ty, &mut |id| {
                    report(id, action_location(module, controller, action))
                });
            }
        }

        for (owner, complex) in &model.types {
            let nested = complex
                .generic_arguments
                .iter()
                .chain(complex.properties.iter().map(|p| &p.ty));
            for ty in nested {
                visit_complex_refs(ty, &mut |id| report(id, format!("types.{owner}")));
            }
        }
    }
}
