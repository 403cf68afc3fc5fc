//! Errors raised by the board model

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board size {size}: a board needs at least one square")]
    InvalidSize { size: usize },
    #[error("board size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
}
