//! One-ply strategic scoring of candidate moves
//!
//! Each candidate is scored as if the mover placed a stone there (offense)
//! and as if the opponent did (defense, i.e. what the move denies), plus a
//! small positional term. Fork detection rewards a single stone that creates
//! or denies two qualifying lines at once.

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};
use crate::eval::TacticScore;

/// Hypothetical line through a cell along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Run length counting the hypothetical stone
    pub length: usize,
    /// Ends of the run that are not empty: 0, 1 or 2. Board edges count.
    pub blocked: u8,
}

impl LineInfo {
    #[inline]
    fn is_open(self) -> bool {
        self.blocked == 0
    }
}

/// Line `player` would own along `(dr, dc)` after placing at `pos`.
///
/// `pos` itself is assumed empty; only the stones on either side are read.
#[must_use]
pub fn line_info(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> LineInfo {
    let mut length = 1;
    let mut blocked = 0;

    for sign in [1, -1] {
        let mut step = 1;
        loop {
            let (r, c) = pos.step(dr * sign, dc * sign, step);
            let cell = board.cell(r, c);
            if cell.is(player) {
                length += 1;
                step += 1;
                continue;
            }
            if !cell.is_empty() {
                blocked += 1;
            }
            break;
        }
    }

    LineInfo { length, blocked }
}

/// Tally of qualifying lines for one side at one cell
#[derive(Debug, Default)]
struct LineTally {
    five: bool,
    fours: i32,
    threes: i32,
}

impl LineTally {
    /// Count lines that would result from `player` placing at `pos`.
    ///
    /// A four only counts with at most `four_max_blocked` closed ends.
    fn collect(board: &Board, pos: Pos, player: Player, four_max_blocked: u8) -> Self {
        let mut tally = Self::default();
        for &(dr, dc) in &DIRECTIONS {
            let info = line_info(board, pos, dr, dc, player);
            match info.length {
                n if n >= 5 => tally.five = true,
                4 if info.blocked <= four_max_blocked => tally.fours += 1,
                3 if info.is_open() => tally.threes += 1,
                _ => {}
            }
        }
        tally
    }

    #[inline]
    fn lines(&self) -> i32 {
        self.fours + self.threes
    }
}

/// Gain for `mover` from placing at `pos`
fn offense_score(board: &Board, pos: Pos, mover: Player) -> i32 {
    // A four counts unless both ends are closed
    let tally = LineTally::collect(board, pos, mover, 1);
    if tally.five {
        return TacticScore::WIN;
    }

    let mut score = tally.fours * TacticScore::CREATE_4 + tally.threes * TacticScore::CREATE_3;
    if tally.lines() >= 2 {
        score += TacticScore::CREATE_DOUBLE;
    }
    score
}

/// Value of denying the opponent the cell at `pos`
fn defense_score(board: &Board, pos: Pos, mover: Player) -> i32 {
    // Only an open four would be unstoppable for the opponent
    let tally = LineTally::collect(board, pos, mover.opponent(), 0);
    let mut score = 0;
    if tally.five {
        score += TacticScore::BLOCK_WIN;
    }

    score += tally.fours * TacticScore::BLOCK_OPEN_3 + tally.threes * TacticScore::BLOCK_2;
    if tally.lines() >= 2 {
        score += TacticScore::BLOCK_DOUBLE;
    }
    score
}

/// Centre band bonus plus a flat bonus for any stone in the 5x5 neighbourhood
fn positional_score(board: &Board, pos: Pos) -> i32 {
    let center = board.dims().center();
    let dist = (i32::from(pos.row) - i32::from(center.row))
        .abs()
        .max((i32::from(pos.col) - i32::from(center.col)).abs());

    let center_bonus = TacticScore::CENTER_BANDS
        .iter()
        .find(|&&(max_dist, _)| dist <= max_dist)
        .map_or(0, |&(_, bonus)| bonus);

    let has_neighbor = (-2..=2).any(|dr| {
        (-2..=2).any(|dc| {
            let (r, c) = pos.step(dr, dc, 1);
            matches!(board.cell(r, c), Cell::Stone(_))
        })
    });

    center_bonus + if has_neighbor { TacticScore::NEIGHBOR } else { 0 }
}

/// One-ply score of `pos` for `mover`. `pos` must be empty.
#[must_use]
pub fn score_candidate(board: &Board, pos: Pos, mover: Player) -> i32 {
    offense_score(board, pos, mover) + defense_score(board, pos, mover) + positional_score(board, pos)
}

/// Highest-scoring candidate for `mover`.
///
/// Ties keep the earlier candidate, so a row-major candidate list gives a
/// row-major tie-break.
#[must_use]
pub fn best_strategic_move(board: &Board, candidates: &[Pos], mover: Player) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;
    for &pos in candidates {
        let score = score_candidate(board, pos, mover);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best
}
