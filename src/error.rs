//! Errors returned by duration parsing.
//!
//! Formatting never fails, so everything here concerns text → milliseconds.

use thiserror::Error;

/// Longest input, in characters, the parser will look at.
pub const MAX_INPUT_LEN: usize = 100;

/// Result type alias for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input longer than [`MAX_INPUT_LEN`] characters
    #[error("input is {len} characters long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },

    /// Input is blank or is not a duration
    #[error("{input:?} is not a duration")]
    NoMatch { input: String },

    /// A number was followed by a word that names no unit
    #[error("unsupported unit: {unit}")]
    UnsupportedUnit { unit: String },
}

impl ParseError {
    /// True when the input simply held no duration.
    ///
    /// Callers that treat a missing duration as a normal condition can
    /// branch on this and still surface the other variants.
    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseError::NoMatch { .. })
    }

    pub(crate) fn no_match(input: &str) -> ParseError {
        ParseError::NoMatch {
            input: input.to_string(),
        }
    }
}
