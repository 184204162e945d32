use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsproxy_config::{ConfigFile, DEFAULT_CONFIG_FILE, ModelFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON API description
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to tsproxy.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output file (overrides tsproxy.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generator to run (overrides tsproxy.toml setting)
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open_or_default(&self.config).unwrap_or_exit();
        let model = ModelFile::open(&self.model).unwrap_or_exit();

        let options = GenerateOptions {
            generator: self.generator.clone(),
            output: self.output.clone(),
            dry_run: self.dry_run,
        };
        let report = ops::generate(model.into_model(), config.config(), &options)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
