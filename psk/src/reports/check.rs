//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating a header.
///
/// The token itself is never printed.
#[derive(Debug)]
pub struct CheckReport {
    /// Validated header path.
    pub path: PathBuf,
    /// Generator named in the header comment.
    pub generator: Option<String>,
    /// Length of the embedded token.
    pub token_len: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.status(&format!("✓ {} is valid", self.path.display()));
        out.newline();
        out.key_value(
            "Generated by",
            self.generator.as_deref().unwrap_or("(no generator comment)"),
        );
        out.key_value("Token", &format!("{} characters", self.token_len));
    }
}
