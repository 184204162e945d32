//! Generate operation - run the pipeline and a registered generator.

use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use tsproxy_codegen::{
    generation::GeneratorRegistry,
    pipeline::{CompilationContext, Pipeline, TracePlugin},
};
use tsproxy_config::ProxyConfig;
use tsproxy_core::{File, FileRules};
use tsproxy_model::ApiDescriptionModel;

use crate::reports::{GenerateReport, GenerationResult, format_diagnostic};

/// Line prepended to the script when `ts_nocheck` is set.
const TS_NOCHECK: &str = "// @ts-nocheck";

/// Command-line overrides of the `[generator]` section.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub generator: Option<String>,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// Every generator this binary ships, configured from `config`.
pub fn registry(config: &ProxyConfig) -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    tsproxy_codegen_angular::register(&mut registry, config);
    registry
}

/// Execute the generate operation.
///
/// Fails without writing anything when validation reports errors.
pub fn generate(
    model: ApiDescriptionModel,
    config: &ProxyConfig,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let mut ctx = CompilationContext::new(model);
    let pipeline = Pipeline::new().plugin(TracePlugin::new());
    if let Err(e) = pipeline.run_context(&mut ctx) {
        let details: Vec<String> = ctx
            .errors()
            .map(|d| format!("error: {}", format_diagnostic(d)))
            .collect();
        if details.is_empty() {
            return Err(e.wrap_err("Pipeline failed"));
        }
        return Err(eyre!("{}", details.join("\n")).wrap_err(e.to_string()));
    }

    let warnings = ctx.warnings().map(format_diagnostic).collect();
    let (model, computed) = ctx.into_parts()?;

    let name = options
        .generator
        .as_deref()
        .unwrap_or(&config.generator.name);
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| config.generator.output.clone());

    tracing::info!(generator = name, output = %output.display(), "generating client");
    let script = registry(config)
        .get(name)?
        .create_script(&model)
        .wrap_err("Failed to generate code")?;

    let result = if options.dry_run {
        GenerationResult::Preview { content: script }
    } else {
        let rules = FileRules {
            header: config.generator.ts_nocheck.then_some(TS_NOCHECK),
            ..Default::default()
        };
        let written = File::new(&output, script)
            .with_rules(rules)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        generator: name.to_string(),
        output,
        warnings,
        modules: computed.module_count,
        controllers: computed.controller_count,
        actions: computed.action_count,
        result,
    })
}
