//! Candidate move generation
//!
//! Search and scoring only look at empty cells near existing stones.

use log::warn;

use crate::board::{Board, Pos};

/// Default Chebyshev radius around each stone
pub const CANDIDATE_RADIUS: u8 = 2;

/// Generate candidate moves in row-major order.
///
/// - Empty board: the grid's centre only.
/// - Otherwise: every empty cell within `radius` (Chebyshev) of a stone.
/// - If that leaves nothing while empty cells remain, every empty cell.
///
/// The result is empty only when the board is full.
#[must_use]
pub fn generate_candidates(board: &Board, radius: u8) -> Vec<Pos> {
    let dims = board.dims();

    if board.is_board_empty() {
        return vec![dims.center()];
    }

    let radius = i32::from(radius);
    let mut near = vec![false; dims.cells()];

    for &stone in board.history() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let (r, c) = stone.step(dr, dc, 1);
                if let Some(pos) = dims.pos(r, c) {
                    near[dims.index(pos)] = true;
                }
            }
        }
    }

    let moves: Vec<Pos> = near
        .iter()
        .enumerate()
        .filter(|&(_, &is_near)| is_near)
        .map(|(idx, _)| dims.pos_at(idx))
        .filter(|&pos| board.is_empty(pos))
        .collect();

    if moves.is_empty() && !board.is_full() {
        warn!(
            "no empty cell within radius {} of {} stones, widening to the whole board",
            radius,
            board.stone_count()
        );
        return board.empty_cells().collect();
    }

    moves
}
