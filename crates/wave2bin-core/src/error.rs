//! Errors from the conversion pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The path source produced nothing (e.g. a cancelled file picker).
    #[error("no input file selected")]
    NoInput,

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Zero-length input leaves nothing to parse as a base-16 integer.
    #[error("empty input: an empty hex string has no integer value")]
    EmptyInput,

    #[error("invalid hex digit '{digit}' at offset {offset}")]
    InvalidHexDigit { digit: char, offset: usize },

    #[error("unknown bit width '{value}'. Available widths: natural, fixed")]
    InvalidWidth { value: String },

    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
