//! Error types for the event parsing library.
//!
//! Line parsing and mode parsing fail in different ways and for different
//! reasons, so each gets its own enum. Protocol oddities coming from the
//! network (unknown modes, missing parameters, malformed timestamps) are
//! not errors at all: they are absorbed into the parsed values.

use thiserror::Error;

use crate::mode::ModeCategory;

/// Convenience type alias for Results using [`ModeParseError`].
pub type Result<T, E = ModeParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing a raw IRC line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line has no command token (empty, or only tags and an origin).
    #[error("empty line: no command token")]
    EmptyLine,
}

/// Errors raised by the mode grammar and the mode parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModeParseError {
    /// The letter is neither in a mode category nor a privilege.
    #[error("unknown mode letter: {letter:?}")]
    UnknownMode {
        /// The unrecognized mode letter.
        letter: char,
    },

    /// A category has letters but no parameter policy.
    #[error("mode category {category} has no parameter policy")]
    ImproperlyConfigured {
        /// The category missing its policy.
        category: ModeCategory,
    },

    /// The same letter was declared in two categories.
    #[error("mode letter {letter:?} declared in both category {first} and {second}")]
    DuplicateLetter {
        /// The conflicting letter.
        letter: char,
        /// The category that declared it first.
        first: ModeCategory,
        /// The category that declared it again.
        second: ModeCategory,
    },
}

impl ModeParseError {
    /// Returns true for errors that describe a broken grammar rather than
    /// unexpected wire data.
    pub fn is_config_defect(&self) -> bool {
        matches!(
            self,
            ModeParseError::ImproperlyConfigured { .. } | ModeParseError::DuplicateLetter { .. }
        )
    }
}
