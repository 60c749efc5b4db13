//! Build-time generation of the `psk.hpp` header.
//!
//! The header holds a random 63 character alphanumeric placeholder for the
//! firmware's pre-shared key. It is written once, when missing, and left
//! alone on every later build.

mod builder;
mod error;
mod file;
mod generate;
mod header;
mod inspect;
mod token;

pub use builder::CodeBuilder;
pub use error::{Error, Result};
pub use file::{FileState, GeneratedFile, WriteResult, probe};
pub use generate::{ensure_generated, ensure_generated_with, preview};
pub use header::{
    CONSTANT, DEFAULT_GENERATOR, DEFAULT_OUTPUT, GUARD, HeaderConfig, INCLUDE, NAMESPACE,
    PskHeader, STORAGE_QUALIFIER,
};
pub use inspect::{HeaderInfo, inspect};
pub use token::{PskToken, TOKEN_LEN};
