//! Board structure with push/undo history

use rustc_hash::FxHashMap;

use super::bitboard::Bitboard;
use super::error::BoardError;
use super::{BoardDims, Cell, Player, Pos, Stone};

/// Dense board built from a caller's stone list.
///
/// Lookups go through a row-major matrix; per-player bitboards give ordered
/// iteration over one side's stones. The history records placements so the
/// search can undo them.
#[derive(Debug, Clone)]
pub struct Board {
    dims: BoardDims,
    cells: Vec<Option<Player>>,
    black: Bitboard,
    white: Bitboard,
    history: Vec<Pos>,
}

impl Board {
    pub fn new(dims: BoardDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cells()],
            black: Bitboard::new(dims.cells()),
            white: Bitboard::new(dims.cells()),
            history: Vec::with_capacity(dims.cells()),
        }
    }

    /// Build a board from stones in move order.
    ///
    /// Fails on the first out-of-range or duplicated coordinate.
    pub fn from_stones(stones: &[Stone], dims: BoardDims) -> Result<Self, BoardError> {
        let mut index: FxHashMap<Pos, Player> = FxHashMap::default();
        index.reserve(stones.len());

        for stone in stones {
            let pos = dims
                .pos(stone.row, stone.col)
                .ok_or(BoardError::OutOfBounds {
                    row: stone.row,
                    col: stone.col,
                    rows: dims.rows(),
                    cols: dims.cols(),
                })?;
            if index.insert(pos, stone.owner).is_some() {
                return Err(BoardError::DuplicateStone {
                    row: stone.row,
                    col: stone.col,
                });
            }
        }

        let mut board = Self::new(dims);
        for stone in stones {
            if let Some(pos) = dims.pos(stone.row, stone.col) {
                board.place(pos, stone.owner);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    /// Get owner of an on-board position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[self.dims.index(pos)]
    }

    /// Lookup by signed coordinates; off-grid cells yield `Cell::OffBoard`
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        match self.dims.pos(row, col) {
            Some(pos) => match self.get(pos) {
                Some(player) => Cell::Stone(player),
                None => Cell::Empty,
            },
            None => Cell::OffBoard,
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone on an empty cell and record it for `undo`
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = self.dims.index(pos);
        debug_assert!(self.cells[idx].is_none(), "cell {:?} already occupied", pos);
        self.cells[idx] = Some(player);
        self.stones_mut(player).set(idx);
        self.history.push(pos);
    }

    /// Remove the most recent stone, returning its position
    #[inline]
    pub fn undo(&mut self) -> Option<Pos> {
        let pos = self.history.pop()?;
        let idx = self.dims.index(pos);
        if let Some(player) = self.cells[idx].take() {
            self.stones_mut(player).clear(idx);
        }
        Some(pos)
    }

    /// Stones of one player in row-major order
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        let dims = self.dims;
        self.bitboard(player).iter_ones().map(move |idx| dims.pos_at(idx))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| dims.pos_at(idx))
    }

    /// Placements in move order
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.dims.cells()
    }

    #[inline]
    fn bitboard(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardDims::default())
    }
}
