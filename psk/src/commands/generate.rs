use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use iop_psk_core::{
    DEFAULT_GENERATOR, DEFAULT_OUTPUT, FileState, GeneratedFile, HeaderConfig, WriteResult,
    ensure_generated_with, preview, probe,
};

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, Outcome, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Header to create (its directory must already exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Build step named in the generated comment
    #[arg(short, long, default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Print the header that would be written without touching disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = HeaderConfig::new(&self.generator);
        let mut rng = rand::rng();

        let outcome = if self.dry_run {
            match probe(&self.output).unwrap_or_exit() {
                FileState::Present => Outcome::WouldSkip,
                FileState::Absent => Outcome::Preview(preview(&config, &mut rng).render()),
            }
        } else {
            match ensure_generated_with(&self.output, &config, &mut rng).unwrap_or_exit() {
                WriteResult::Written => Outcome::Written,
                WriteResult::Skipped => Outcome::Skipped,
            }
        };

        GenerateReport {
            path: self.output.clone(),
            outcome,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
