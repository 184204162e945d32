//! Lint for path parameters missing from the URL template.

use tsproxy_model::{ApiDescriptionModel, BindingSource};

use super::{super::Lint, action_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a Path parameter has no `{name}` placeholder.
///
/// The generated call would silently drop the value.
pub struct UrlPlaceholderLint;

impl Lint for UrlPlaceholderLint {
    fn name(&self) -> &'static str {
        "url-placeholder"
    }

    fn description(&self) -> &'static str {
        "Path parameters appear as placeholders in the action URL"
    }

    fn check(&self, model: &ApiDescriptionModel, diagnostics: &mut Vec<Diagnostic>) {
        for (module, controller, action) in model.actions() {
            for parameter in action.parameters_from(BindingSource::Path) {
                let placeholder = format!("{{{}}}", parameter.name);
                if !action.url.contains(&placeholder) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "path parameter '{}' has no {} placeholder in '{}'",
                                parameter.name, placeholder, action.url
                            ),
                        )
                        .at(action_location(module, controller, action)),
                    );
                }
            }
        }
    }
}
