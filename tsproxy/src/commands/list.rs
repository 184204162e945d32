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
pub struct ListCommand {
    /// Path to the JSON API description
    #[arg(short, long)]
    pub model: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let model = ModelFile::open(&self.model).unwrap_or_exit();
        ops::list(model.model()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
