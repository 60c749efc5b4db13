use std::{fs, path::PathBuf};

use clap::Args;
use eyre::Result;
use iop_psk_core::{DEFAULT_OUTPUT, Error, inspect};

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Header to validate
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let content = fs::read_to_string(&self.output)
            .map_err(|e| Error::io(&self.output, e))
            .unwrap_or_exit();
        let info = inspect(&content).unwrap_or_exit();

        CheckReport {
            path: self.output.clone(),
            generator: info.generator,
            token_len: info.token.as_str().len(),
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
