//! Generate command report data structures.

use std::path::PathBuf;

use tsproxy_core::WriteResult;

use super::output::{Output, Report};

/// What happened to the generated script.
#[derive(Debug)]
pub enum GenerationResult {
    /// Dry run: the script as it would be written.
    Preview { content: String },
    /// The script was handed to the file writer.
    Written(WriteResult),
}

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Registry name of the generator that ran.
    pub generator: String,
    pub output: PathBuf,
    /// Pipeline warnings, already formatted with their locations.
    pub warnings: Vec<String>,
    pub modules: usize,
    pub controllers: usize,
    pub actions: usize,
    pub result: GenerationResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Preview { content } => {
                out.divider(&self.output.display().to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} would be generated by '{}'",
                    self.output.display(),
                    self.generator
                ));
            }
            GenerationResult::Written(result) => {
                out.key_value("Generator", &self.generator);
                out.key_value(
                    "Source",
                    &format!(
                        "{} modules, {} controllers, {} actions",
                        self.modules, self.controllers, self.actions
                    ),
                );
                out.newline();
                match result {
                    WriteResult::Written => {
                        out.section("Generated");
                        out.added_item(&self.output.display().to_string());
                    }
                    WriteResult::Skipped => {
                        out.preformatted(&format!(
                            "Skipped {} (already exists)",
                            self.output.display()
                        ));
                    }
                }
            }
        }
    }
}
