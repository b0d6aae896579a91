//! Win condition checking
//!
//! A player wins with five or more stones in a row along any of the four
//! axes. Overlines count.

use crate::board::{Board, Player, Pos, DIRECTIONS};

/// Run length through `pos` along one axis, counting both ways
#[inline]
pub fn run_length_at(board: &Board, pos: Pos, dr: i32, dc: i32, color: Player) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        let mut steps = 1;
        loop {
            let (r, c) = pos.step(dr * sign, dc * sign, steps);
            if !board.cell(r, c).is(color) {
                break;
            }
            count += 1;
            steps += 1;
        }
    }
    count
}

/// Fast five-in-a-row check through a specific position.
///
/// Only walks the 4 axes from `pos`, so it is the check to use right after
/// placing a stone there.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length_at(board, pos, dr, dc, color) >= 5)
}

/// Find the positions of a 5-or-more line if one exists
pub fn find_five_positions(board: &Board, color: Player) -> Option<Vec<Pos>> {
    let dims = board.dims();
    for pos in board.stones(color) {
        for &(dr, dc) in &DIRECTIONS {
            // Start only at the first stone of a run
            let (pr, pc) = pos.step(dr, dc, -1);
            if board.cell(pr, pc).is(color) {
                continue;
            }
            let line: Vec<Pos> = (0..)
                .map_while(|i| {
                    let (r, c) = pos.step(dr, dc, i);
                    dims.pos(r, c).filter(|&p| board.get(p) == Some(color))
                })
                .collect();
            if line.len() >= 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Check if there's 5+ in a row for the given color
pub fn has_five(board: &Board, color: Player) -> bool {
    find_five_positions(board, color).is_some()
}

/// Winner of the position, if any. Black is checked first.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Black, Player::White]
        .into_iter()
        .find(|&color| has_five(board, color))
}
