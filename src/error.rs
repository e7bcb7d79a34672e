use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A word held something other than the letters `a..=z`.
    #[error("invalid word {word:?}: {found:?} is not a lowercase letter")]
    InvalidInput { word: String, found: char },

    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary line did not match its `FileFormat`.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
