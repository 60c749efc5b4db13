//! Generate the header when it is missing.

use std::path::Path;

use rand::Rng;

use crate::{GeneratedFile, HeaderConfig, PskHeader, PskToken, WriteResult, error::Result};

/// Create the header at `output_path` unless a file is already there.
///
/// An existing file is neither read nor validated. The parent directory
/// must exist; it is never created here.
pub fn ensure_generated(output_path: &Path) -> Result<WriteResult> {
    ensure_generated_with(output_path, &HeaderConfig::default(), &mut rand::rng())
}

/// Like [`ensure_generated`], with an explicit config and random source.
pub fn ensure_generated_with<R: Rng + ?Sized>(
    output_path: &Path,
    config: &HeaderConfig,
    rng: &mut R,
) -> Result<WriteResult> {
    PskHeader::new(PskToken::generate(rng), config.clone()).write_if_missing(output_path)
}

/// Render a fresh header without touching the filesystem.
pub fn preview<R: Rng + ?Sized>(config: &HeaderConfig, rng: &mut R) -> PskHeader {
    PskHeader::new(PskToken::generate(rng), config.clone())
}
