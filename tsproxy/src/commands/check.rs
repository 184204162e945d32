use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsproxy_config::ModelFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON API description
    #[arg(short, long)]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let model = ModelFile::open(&self.model).unwrap_or_exit();

        let report = ops::check(model.into_model(), &self.model)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
