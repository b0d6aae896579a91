use thiserror::Error;

/// Reasons a stone list cannot be turned into a [`Board`](super::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("two stones share the cell ({row}, {col})")]
    DuplicateStone { row: i32, col: i32 },
    #[error("stone at ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
    #[error("grid size {rows}x{cols} is not supported, each side must be 1..=255")]
    InvalidDimensions { rows: usize, cols: usize },
}
