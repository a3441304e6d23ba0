//! Errors raised while reading move notation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid move: {0}")]
    InvalidMove(char),

    #[error("Unclosed group in algorithm.")]
    UnclosedGroup,

    #[error("Unexpected closing parenthesis in algorithm.")]
    UnexpectedClose,

    #[error("Invalid repeat count: {0}")]
    RepeatCount(String),
}
