//! Board representation for the move-selection engine

pub mod bitboard;
pub mod board;
pub mod error;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use error::BoardError;

/// Default grid height
pub const DEFAULT_ROWS: u8 = 30;
/// Default grid width
pub const DEFAULT_COLS: u8 = 18;

/// Scan axes in tie-break order: →, ↓, ↘, ↙
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Stone colors. `Black` is player "A", `White` is player "B".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[serde(alias = "A", alias = "a")]
    Black,
    #[serde(alias = "B", alias = "b")]
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl FromStr for Player {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "black" => Ok(Player::Black),
            "b" | "white" => Ok(Player::White),
            _ => Err(EngineError::UnknownPlayer(s.to_string())),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

/// Content of a coordinate as seen by the scanners.
///
/// `OffBoard` is the sentinel for lookups outside the grid; it is neither
/// empty nor owned by anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Player),
    OffBoard,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }
}

/// A placed stone as supplied by the caller.
///
/// Coordinates are signed so that malformed input can be represented and
/// rejected by [`Board::from_stones`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub row: i32,
    pub col: i32,
    pub owner: Player,
}

impl Stone {
    #[inline]
    pub fn new(row: i32, col: i32, owner: Player) -> Self {
        Self { row, col, owner }
    }
}

/// Position on the board. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Signed coordinates `steps` cells away along `(dr, dc)`
    #[inline]
    pub fn step(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }
}

/// Grid size. Both sides are in `1..=255` so every cell fits a [`Pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardDims {
    rows: u8,
    cols: u8,
}

impl BoardDims {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        match (u8::try_from(rows), u8::try_from(cols)) {
            (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok(Self { rows: r, cols: c }),
            _ => Err(BoardError::InvalidDimensions { rows, cols }),
        }
    }

    #[inline]
    pub fn rows(self) -> usize {
        usize::from(self.rows)
    }

    #[inline]
    pub fn cols(self) -> usize {
        usize::from(self.cols)
    }

    /// Total number of cells
    #[inline]
    pub fn cells(self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn contains(self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.rows) && col >= 0 && col < i32::from(self.cols)
    }

    /// Convert in-range signed coordinates to a `Pos`
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pos(self, row: i32, col: i32) -> Option<Pos> {
        self.contains(row, col)
            .then(|| Pos::new(row as u8, col as u8))
    }

    #[inline]
    pub fn index(self, pos: Pos) -> usize {
        usize::from(pos.row) * self.cols() + usize::from(pos.col)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pos_at(self, idx: usize) -> Pos {
        Pos::new((idx / self.cols()) as u8, (idx % self.cols()) as u8)
    }

    /// Default opening coordinate: `(rows / 2, cols / 2)`
    #[inline]
    pub fn center(self) -> Pos {
        Pos::new(self.rows / 2, self.cols / 2)
    }
}

impl Default for BoardDims {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}
