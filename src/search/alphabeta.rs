//! Minimax search with alpha-beta pruning
//!
//! The root maximises for the engine's colour and plies alternate with the
//! opponent minimising. Every node generates candidates, orders them with the
//! strategic scorer for the side to move and keeps only the best `width`.
//! Leaves are scored with [`evaluate`] from the root player's perspective.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new(2, 10);
//! let mut board = Board::default();
//! board.place(Pos::new(15, 9), Player::Black);
//!
//! let result = searcher.search(&board, Player::White);
//! assert!(result.best_move.is_some());
//! ```

use std::cmp::Reverse;

use log::{debug, trace};

use crate::board::{Board, Player, Pos, DIRECTIONS};
use crate::eval::evaluate;
use crate::rules::has_five_at;

use super::candidates::{generate_candidates, CANDIDATE_RADIUS};
use super::strategic::score_candidate;

/// Bound for alpha-beta windows, well clear of any evaluation plus penalty
const INF: i32 = i32::MAX / 2;

/// Subtracted from a maximising move placed one gap off an opponent pair
pub const ANTI_CONNECTION_PENALTY: i32 = 500;

/// Default cap on visited nodes per search
pub const DEFAULT_MAX_NODES: u64 = 50_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when no candidates exist
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Whether the node budget turned interior nodes into leaves
    pub budget_exhausted: bool,
}

/// Depth- and width-bounded minimax searcher.
///
/// Holds only limits and per-search counters; the board is cloned per call so
/// the caller's board is never touched.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    width: usize,
    radius: u8,
    max_nodes: u64,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    /// Create a searcher for `depth` plies keeping the top `width` moves per node
    pub fn new(depth: u8, width: usize) -> Self {
        Self {
            depth: depth.max(1),
            width: width.max(1),
            radius: CANDIDATE_RADIUS,
            max_nodes: DEFAULT_MAX_NODES,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Set the candidate neighbourhood radius
    #[must_use]
    pub fn with_radius(mut self, radius: u8) -> Self {
        self.radius = radius;
        self
    }

    /// Set the node budget
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Search for the best move for `color`.
    pub fn search(&mut self, board: &Board, color: Player) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let mut board = board.clone();
        let moves = self.ordered_moves(&board, color);

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in moves {
            let penalty = anti_connection_penalty(&board, mov, color);
            board.place(mov, color);
            let score = self.minimax(
                &mut board,
                self.depth - 1,
                alpha.saturating_add(penalty),
                INF.saturating_add(penalty),
                false,
                color,
                mov,
            ) - penalty;
            board.undo();

            trace!("root move ({}, {}) scored {}", mov.row, mov.col, score);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        let result = SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
            cutoffs: self.cutoffs,
            budget_exhausted: self.budget_exhausted(),
        };

        debug!(
            "search depth {} width {}: {:?} score {} nodes {} cutoffs {}{}",
            self.depth,
            self.width,
            result.best_move,
            result.score,
            result.nodes,
            result.cutoffs,
            if result.budget_exhausted { " (budget exhausted)" } else { "" }
        );

        result
    }

    /// Alpha-beta minimax below the root. `last` is the move that led here.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Player,
        last: Pos,
    ) -> i32 {
        self.nodes += 1;

        let last_color = if maximizing { root.opponent() } else { root };
        if depth == 0 || has_five_at(board, last, last_color) || self.budget_exhausted() {
            return evaluate(board, root);
        }

        let to_move = last_color.opponent();
        let moves = self.ordered_moves(board, to_move);
        if moves.is_empty() {
            return evaluate(board, root);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                // The child's value is reduced by the penalty afterwards, so
                // its window moves up by the same amount
                let penalty = anti_connection_penalty(board, mov, to_move);
                board.place(mov, to_move);
                let score = self.minimax(
                    board,
                    depth - 1,
                    alpha.saturating_add(penalty),
                    beta.saturating_add(penalty),
                    false,
                    root,
                    mov,
                ) - penalty;
                board.undo();

                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                board.place(mov, to_move);
                let score = self.minimax(board, depth - 1, alpha, beta, true, root, mov);
                board.undo();

                best = best.min(score);
                beta = beta.min(best);
                if alpha >= beta {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Candidates for `color`, best strategic score first, cut to `width`.
    ///
    /// The sort is stable so equal scores stay in row-major order.
    fn ordered_moves(&self, board: &Board, color: Player) -> Vec<Pos> {
        let mut scored: Vec<(Pos, i32)> = generate_candidates(board, self.radius)
            .into_iter()
            .map(|pos| (pos, score_candidate(board, pos, color)))
            .collect();
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored.truncate(self.width);
        scored.into_iter().map(|(pos, _)| pos).collect()
    }

    #[inline]
    fn budget_exhausted(&self) -> bool {
        self.nodes >= self.max_nodes
    }
}

/// Penalty for `color` playing `pos` when, along any of the 8 half-axes, the
/// next cell is empty and the two after it are a connected opponent pair
/// (`P.OO`). A stone right against the pair caps it and is not penalised.
#[must_use]
pub fn anti_connection_penalty(board: &Board, pos: Pos, color: Player) -> i32 {
    let opponent = color.opponent();
    let loose_near_pair = DIRECTIONS.iter().any(|&(dr, dc)| {
        [1, -1].iter().any(|&sign| {
            let (r, c) = pos.step(dr * sign, dc * sign, 1);
            board.cell(r, c).is_empty()
                && (2..=3).all(|step| {
                    let (r, c) = pos.step(dr * sign, dc * sign, step);
                    board.cell(r, c).is(opponent)
                })
        })
    });

    if loose_near_pair {
        ANTI_CONNECTION_PENALTY
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::default();
        for &(r, c) in black {
            board.place(Pos::new(r, c), Player::Black);
        }
        for &(r, c) in white {
            board.place(Pos::new(r, c), Player::White);
        }
        board
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new(3, 12);
        let result = searcher.search(&Board::default(), Player::Black);
        assert_eq!(result.best_move, Some(Pos::new(15, 9)));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let board = board_with(&[(10, 5), (10, 6), (10, 7), (10, 8)], &[(11, 5), (11, 6)]);
        let mut searcher = Searcher::new(1, 15);
        let result = searcher.search(&board, Player::Black);

        let best = result.best_move.expect("a move");
        assert!(best == Pos::new(10, 4) || best == Pos::new(10, 9), "got {:?}", best);
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // White's four is closed on the left: (10,9) is the only defence
        let board = board_with(&[(10, 4), (12, 12)], &[(10, 5), (10, 6), (10, 7), (10, 8)]);
        let mut searcher = Searcher::new(2, 10);
        let result = searcher.search(&board, Player::Black);

        assert_eq!(result.best_move, Some(Pos::new(10, 9)));
        assert!(result.score > -PatternScore::WIN);
    }

    #[test]
    fn test_search_losing_score() {
        // An open four cannot be stopped
        let board = board_with(&[(3, 3)], &[(10, 5), (10, 6), (10, 7), (10, 8)]);
        let mut searcher = Searcher::new(2, 10);
        let result = searcher.search(&board, Player::Black);
        assert_eq!(result.score, -PatternScore::WIN);
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = board_with(&[(10, 10), (11, 11)], &[(10, 11)]);
        let before: Vec<Pos> = board.history().to_vec();

        let mut searcher = Searcher::new(3, 8);
        searcher.search(&board, Player::White);

        assert_eq!(board.history(), before.as_slice());
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = board_with(&[(15, 9), (14, 10), (16, 8)], &[(15, 10), (13, 11)]);
        let first = Searcher::new(3, 10).search(&board, Player::White);
        let second = Searcher::new(3, 10).search(&board, Player::White);
        assert_eq!(first, second);
    }

    #[test]
    fn test_node_budget_is_honoured() {
        let board = board_with(&[(15, 9), (14, 10)], &[(15, 10)]);
        let mut searcher = Searcher::new(4, 10).with_max_nodes(5);
        let result = searcher.search(&board, Player::White);

        assert!(result.best_move.is_some());
        assert!(result.budget_exhausted);
        // After exhaustion only the open loops on the current path finish,
        // each with at most `width` leaf visits
        assert!(result.nodes <= 5 + 4 * 10);
    }

    #[test]
    fn test_search_full_board_returns_none() {
        let dims = crate::board::BoardDims::new(2, 2).unwrap();
        let mut board = Board::new(dims);
        board.place(Pos::new(0, 0), Player::Black);
        board.place(Pos::new(0, 1), Player::White);
        board.place(Pos::new(1, 0), Player::White);
        board.place(Pos::new(1, 1), Player::Black);

        let result = Searcher::new(2, 10).search(&board, Player::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_anti_connection_penalty() {
        let board = board_with(&[], &[(10, 10), (10, 11)]);
        assert_eq!(
            anti_connection_penalty(&board, Pos::new(10, 8), Player::Black),
            ANTI_CONNECTION_PENALTY
        );
        assert_eq!(
            anti_connection_penalty(&board, Pos::new(10, 13), Player::Black),
            ANTI_CONNECTION_PENALTY
        );
        // One opponent stone is not a pair
        assert_eq!(anti_connection_penalty(&board, Pos::new(9, 10), Player::Black), 0);
        // Own stones never trigger it
        assert_eq!(anti_connection_penalty(&board, Pos::new(10, 8), Player::White), 0);
    }

    #[test]
    fn test_capping_a_pair_is_not_penalised() {
        let board = board_with(&[], &[(10, 10), (10, 11), (4, 4), (5, 5)]);
        assert_eq!(anti_connection_penalty(&board, Pos::new(10, 9), Player::Black), 0);
        assert_eq!(anti_connection_penalty(&board, Pos::new(10, 12), Player::Black), 0);
        assert_eq!(anti_connection_penalty(&board, Pos::new(3, 3), Player::Black), 0);
        assert_eq!(anti_connection_penalty(&board, Pos::new(6, 6), Player::Black), 0);
        assert_eq!(
            anti_connection_penalty(&board, Pos::new(7, 7), Player::Black),
            ANTI_CONNECTION_PENALTY
        );
    }

    #[test]
    fn test_gap_is_filled_by_the_other_side() {
        // The gap cell between our stone and the pair must be empty
        let board = board_with(&[(10, 9)], &[(10, 10), (10, 11)]);
        assert_eq!(anti_connection_penalty(&board, Pos::new(10, 8), Player::Black), 0);
    }

    /// Minimax over the same ordered move lists, without pruning or budget
    fn plain_minimax(
        searcher: &Searcher,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        root: Player,
        last: Pos,
    ) -> i32 {
        let last_color = if maximizing { root.opponent() } else { root };
        if depth == 0 || has_five_at(board, last, last_color) {
            return evaluate(board, root);
        }

        let to_move = last_color.opponent();
        let moves = searcher.ordered_moves(board, to_move);
        if moves.is_empty() {
            return evaluate(board, root);
        }

        let mut scores = Vec::with_capacity(moves.len());
        for mov in moves {
            let penalty = if maximizing { anti_connection_penalty(board, mov, to_move) } else { 0 };
            board.place(mov, to_move);
            scores.push(plain_minimax(searcher, board, depth - 1, !maximizing, root, mov) - penalty);
            board.undo();
        }

        let best = if maximizing { scores.iter().max() } else { scores.iter().min() };
        best.copied().unwrap_or(0)
    }

    fn plain_root_score(searcher: &Searcher, board: &Board, color: Player) -> i32 {
        let mut board = board.clone();
        let mut best = -INF;
        for mov in searcher.ordered_moves(&board, color) {
            let penalty = anti_connection_penalty(&board, mov, color);
            board.place(mov, color);
            let score = plain_minimax(searcher, &mut board, searcher.depth - 1, false, color, mov);
            board.undo();
            best = best.max(score - penalty);
        }
        best
    }

    #[test]
    fn test_pruned_score_matches_plain_minimax() {
        let positions: [(&[(u8, u8)], &[(u8, u8)]); 5] = [
            (&[(15, 9), (14, 10), (16, 8)], &[(15, 10), (13, 11)]),
            (&[(10, 10), (10, 11), (12, 12)], &[(11, 10), (11, 11), (9, 9)]),
            (&[(5, 5), (5, 6), (5, 7)], &[(6, 5), (6, 6), (7, 7)]),
            (&[(10, 5), (10, 6), (10, 7), (12, 9)], &[(11, 5), (11, 6), (11, 7)]),
            (&[(8, 8), (8, 11)], &[(8, 9), (8, 10), (9, 9), (10, 10)]),
        ];

        for (black, white) in positions {
            let board = board_with(black, white);
            for color in [Player::Black, Player::White] {
                let mut searcher = Searcher::new(3, 6).with_max_nodes(u64::MAX);
                let pruned = searcher.search(&board, color);
                let expected = plain_root_score(&searcher, &board, color);
                assert_eq!(
                    pruned.score, expected,
                    "{:?} to move, black {:?} white {:?}",
                    color, black, white
                );
            }
        }
    }
}
