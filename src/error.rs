use thiserror::Error;

use crate::board::BoardError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid board state: {0}")]
    InvalidBoardState(#[from] BoardError),
    #[error("unknown difficulty `{0}`, expected easy, medium or hard")]
    UnknownDifficulty(String),
    #[error("unknown player `{0}`, expected a/black or b/white")]
    UnknownPlayer(String),
}
