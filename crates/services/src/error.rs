//! Shared error types for the services crate.
//!
//! Everything here is a local precondition or argument violation: no error
//! is fatal, and a rejected operation leaves session state untouched.

use thiserror::Error;

use quiz_core::model::QuizSummaryError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already completed")]
    Completed,

    #[error("quiz not finished yet")]
    NotFinished,

    #[error("answer already revealed for this question")]
    AlreadyRevealed,

    #[error("no answer revealed for this question yet")]
    NotRevealed,

    #[error("option index {index} out of range for {len} options")]
    InvalidOption { index: usize, len: usize },

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

/// Errors emitted by `QuizController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("{operation} is not valid on the {screen} screen")]
    WrongScreen {
        operation: &'static str,
        screen: &'static str,
    },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}
