//! Check operation - API description validation.

use std::path::Path;

use eyre::Result;
use tsproxy_codegen::pipeline::{CompilationContext, Pipeline, Severity, TracePlugin};
use tsproxy_model::ApiDescriptionModel;

use crate::reports::{CheckReport, format_diagnostic};

/// Execute the check operation.
///
/// Runs the pipeline and returns its diagnostics. Validation errors end up
/// in the report rather than failing the operation.
pub fn check(model: ApiDescriptionModel, model_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(model);
    let pipeline = Pipeline::new().plugin(TracePlugin::new());
    if let Err(e) = pipeline.run_context(&mut ctx) {
        if !ctx.has_errors() {
            return Err(e.wrap_err("Validation failed"));
        }
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let unreachable_types = ctx
        .computed
        .as_ref()
        .map(|c| c.unreachable_count(&ctx.model))
        .unwrap_or_default();

    Ok(CheckReport {
        model_path: model_path.to_path_buf(),
        errors,
        warnings,
        infos,
        stats: ctx.computed,
        unreachable_types,
    })
}
