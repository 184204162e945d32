//! Check command report data structures.

use std::path::PathBuf;

use tsproxy_codegen::schema::ComputedData;

use super::output::{Output, Report};

/// Report data from API description validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API description.
    pub model_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Present when analysis ran, i.e. validation passed.
    pub stats: Option<ComputedData>,
    /// Declared complex types no action reaches.
    pub unreachable_types: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.diagnostic(&format!("error: {}", error));
        }
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        if let Some(stats) = &self.stats {
            out.newline();
            out.preformatted(&format!(
                "  {}, {}, {}",
                plural(stats.module_count, "module"),
                plural(stats.controller_count, "controller"),
                plural(stats.action_count, "action"),
            ));
            out.preformatted(&format!(
                "  {} reachable from actions",
                plural(stats.reachable_types.len(), "complex type"),
            ));
            if self.unreachable_types > 0 {
                out.preformatted(&format!(
                    "  {} never referenced",
                    plural(self.unreachable_types, "complex type"),
                ));
            }
        }
    }
}
