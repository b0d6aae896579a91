//! Critical move finder: immediate wins and forced blocks.
//!
//! Both first look for `n` consecutive stones with an empty cell right after
//! the run (preferred) or right before it, then for a gap that joins a broken
//! four (`X.XXX`, `XX.XX`, `XXX.X`) into five. Cells are scanned row-major and
//! axes in the order →, ↓, ↘, ↙, so the first hit is stable across calls.

use crate::board::{Board, Player, Pos, DIRECTIONS};
use crate::rules::run_length_at;

/// Length of run that is one stone short of five
pub const WINNING_RUN: usize = 4;

/// Find the completion cell of an `n`-stone run of `player`.
#[must_use]
pub fn find_run_completion(board: &Board, player: Player, n: usize) -> Option<Pos> {
    let dims = board.dims();
    // Runs start on a stone, so walking the player's stones row-major is the
    // same scan as walking every cell.
    for start in board.stones(player) {
        for &(dr, dc) in &DIRECTIONS {
            let run = (0..n as i32).all(|i| {
                let (r, c) = start.step(dr, dc, i);
                board.cell(r, c).is(player)
            });
            if !run {
                continue;
            }

            for offset in [n as i32, -1] {
                let (r, c) = start.step(dr, dc, offset);
                if board.cell(r, c).is_empty() {
                    return dims.pos(r, c);
                }
            }
        }
    }
    None
}

/// First empty cell, row-major, where a `player` stone would make five or more
#[must_use]
pub fn find_five_completion(board: &Board, player: Player) -> Option<Pos> {
    board.empty_cells().find(|&pos| {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_length_at(board, pos, dr, dc, player) >= 5)
    })
}

/// Cell that wins on the spot for `player`: a straight four's flank first,
/// then the gap of a broken four.
#[must_use]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Pos> {
    find_run_completion(board, player, WINNING_RUN).or_else(|| find_five_completion(board, player))
}

/// Cell `player` must take to stop the opponent winning next move
#[must_use]
pub fn find_forced_block(board: &Board, player: Player) -> Option<Pos> {
    find_winning_move(board, player.opponent())
}
