//! Compilation context passed through pipeline phases.

use tsproxy_model::ApiDescriptionModel;

use super::diagnostic::{Diagnostic, Severity};
use crate::schema::ComputedData;

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The API description being compiled.
    pub model: ApiDescriptionModel,
    /// Pre-computed analysis data (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(model: ApiDescriptionModel) -> Self {
        Self {
            model,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a pre-built diagnostic, e.g. one carrying a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Split into the model and its computed data.
    ///
    /// Returns an error if AnalyzePhase has not run.
    pub fn into_parts(self) -> eyre::Result<(ApiDescriptionModel, ComputedData)> {
        let computed = self
            .computed
            .ok_or_else(|| eyre::eyre!("computed data not set - did AnalyzePhase run?"))?;
        Ok((self.model, computed))
    }
}
