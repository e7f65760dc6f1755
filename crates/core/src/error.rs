//! Line- and entry-level parse failures.
//!
//! None of these abort a build: callers log them and skip the offending
//! line or entry.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    #[error("line {line} has no phoneme field")]
    MissingFields { line: usize },

    #[error("word alias '{0}' contains non-letters")]
    NonAlphabeticWord(String),

    #[error("no respelling matches '{0}'")]
    NoPronunciation(String),

    #[error("empty respelling")]
    EmptyRespelling,
}
