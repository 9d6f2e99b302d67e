//! Error types for memo-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by quiz session operations.
///
/// The parser never fails; only session operations on an unusable session do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("selected table has no rows")]
    EmptyTable,

    #[error("no active quiz item")]
    NoActiveItem,
}
