use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for iop-psk operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(psk::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory '{dir}' does not exist")]
    #[diagnostic(
        code(psk::missing_parent),
        help("create the directory before running the build")
    )]
    MissingParent { dir: PathBuf },

    #[error("'{path}' exists but is not a regular file")]
    #[diagnostic(
        code(psk::not_a_file),
        help("remove it so the header can be generated")
    )]
    NotAFile { path: PathBuf },

    #[error("token must be {expected} characters long, found {found}")]
    #[diagnostic(code(psk::token_length))]
    TokenLength { expected: usize, found: usize },

    #[error("token contains '{ch}' at position {position}")]
    #[diagnostic(
        code(psk::token_charset),
        help("tokens only use ASCII letters and digits")
    )]
    TokenCharset { ch: char, position: usize },

    #[error("malformed header: {message}")]
    #[diagnostic(
        code(psk::malformed_header),
        help("delete the file and run 'iop-psk generate' to recreate it")
    )]
    Malformed { message: String },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create a structural error for a header that failed inspection
    pub fn malformed(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Malformed {
            message: message.into(),
        })
    }
}
