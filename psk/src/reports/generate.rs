//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target header path.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Result of a generate run.
#[derive(Debug)]
pub enum Outcome {
    /// The header was created.
    Written,
    /// A file was already present and left untouched.
    Skipped,
    /// Dry-run preview of the header content.
    Preview(String),
    /// Dry run against a path that already holds a file.
    WouldSkip,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display();
        match &self.outcome {
            Outcome::Written => out.status(&format!("Generating {}", path)),
            // Incremental builds stay quiet
            Outcome::Skipped => {}
            Outcome::Preview(content) => {
                out.divider(&path.to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!("{} would be generated", path));
            }
            Outcome::WouldSkip => {
                out.status(&format!("{} already exists and would be left untouched", path))
            }
        }
    }
}
