//! Lint trait for model validation.

use tsproxy_model::ApiDescriptionModel;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the model for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (kebab-case).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &ApiDescriptionModel, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
