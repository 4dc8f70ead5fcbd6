//! Quiz error types.
//!
//! Every failure in this crate happens before a session starts: loading a
//! quiz, resolving its question groups, or planning. A running session never
//! fails; malformed answers are simply graded as incorrect.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or planning a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The quiz configuration is missing or malformed.
    #[error("invalid quiz config {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    /// A question group references an identifier with no loaded question.
    #[error("question not found: {0}")]
    QuestionNotFound(String),

    /// A question file was parsed but violates a structural invariant.
    #[error("invalid question {id}: {reason}")]
    QuestionInvalid { id: String, reason: String },

    /// A quiz file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The quiz directory (or the directory holding quizzes) is unusable.
    #[error("invalid quiz directory {}: {reason}", path.display())]
    QuizDirectory { path: PathBuf, reason: String },
}

impl QuizError {
    /// Returns `true` if this error is confined to one quiz.
    ///
    /// Such a quiz cannot be planned, but its siblings may still be usable.
    /// `QuizDirectory` errors affect the directory itself and return `false`.
    pub fn is_fatal_to_planning(&self) -> bool {
        !matches!(self, QuizError::QuizDirectory { .. })
    }

    /// Shorthand for a [`QuizError::ConfigInvalid`].
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        QuizError::ConfigInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`QuizError::QuestionInvalid`].
    pub(crate) fn question(id: impl Into<String>, reason: impl Into<String>) -> Self {
        QuizError::QuestionInvalid {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
