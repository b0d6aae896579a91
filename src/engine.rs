//! Main AI Engine integrating all move-selection stages
//!
//! Each call builds a fresh board from the caller's stones and walks a fixed
//! priority list, returning as soon as a stage produces a move:
//!
//! 1. **Opening**: empty board, play the grid centre
//! 2. **Immediate win**: complete our own four, straight or broken
//! 3. **Defense**: block the opponent's four, straight or broken
//! 4. **Strategic**: best one-ply candidate, if it clears the threshold
//! 5. **Alpha-Beta**: depth-limited search for the difficulty tier
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Difficulty, Player, Pos, Stone};
//!
//! let engine = AIEngine::new();
//! let stones = [Stone::new(15, 9, Player::Black)];
//!
//! let result = engine
//!     .select_move_with_stats(&stones, Difficulty::Easy, Player::White)
//!     .unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use log::{debug, warn};
use serde::Serialize;

use crate::board::{Board, Player, Pos, Stone};
use crate::config::EngineConfig;
use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::eval::TacticScore;
use crate::rules::check_winner;
use crate::search::{
    best_strategic_move, find_forced_block, find_winning_move, generate_candidates, SearchResult,
    Searcher,
};

/// Stage of the pipeline that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Empty board, default centre coordinate
    Opening,
    /// Completes our own five
    ImmediateWin,
    /// Takes the opponent's five-completing cell
    Defense,
    /// One-ply strategic scorer cleared the threshold
    Strategic,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No empty cell left
    NoMove,
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MoveResult {
    /// Chosen move, `None` on a full board
    pub best_move: Option<Pos>,
    /// Score from the stage that chose the move
    pub score: i32,
    /// Stage that chose the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched (0 unless the search ran)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn tactical(pos: Pos, score: i32, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type,
            time_ms: elapsed_ms(start),
            nodes: 0,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms: elapsed_ms(start),
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, start: Instant) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: if result.best_move.is_some() {
                SearchType::AlphaBeta
            } else {
                SearchType::NoMove
            },
            time_ms: elapsed_ms(start),
            nodes: result.nodes,
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Move-selection engine.
///
/// Holds only immutable configuration, so one engine can serve independent
/// calls; every call works on its own board.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Difficulty, EngineConfig, Player, Pos};
///
/// let engine = AIEngine::with_config(EngineConfig::default().with_dims(15, 15));
/// let best = engine.select_move(&[], Difficulty::Hard, Player::Black).unwrap();
/// assert_eq!(best, Some(Pos::new(7, 7)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine for the default 30x18 grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose the next stone for `color`, or `None` when the grid is full.
    pub fn select_move(
        &self,
        stones: &[Stone],
        difficulty: Difficulty,
        color: Player,
    ) -> Result<Option<Pos>, EngineError> {
        Ok(self.select_move_with_stats(stones, difficulty, color)?.best_move)
    }

    /// Choose the next stone and report which stage chose it.
    ///
    /// Fails with [`EngineError::InvalidBoardState`] on duplicated or
    /// out-of-range stones, or an unsupported grid size.
    pub fn select_move_with_stats(
        &self,
        stones: &[Stone],
        difficulty: Difficulty,
        color: Player,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let board = Board::from_stones(stones, self.config.dims()?)?;

        let result = self.choose(&board, difficulty, color, start);
        debug!(
            "{} to move at {}: {:?} via {:?} (score {}, {} nodes, {}ms)",
            color,
            difficulty,
            result.best_move,
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );
        Ok(result)
    }

    fn choose(&self, board: &Board, difficulty: Difficulty, color: Player, start: Instant) -> MoveResult {
        if let Some(winner) = check_winner(board) {
            warn!("{} already has five in a row, choosing a move anyway", winner);
        }

        if board.is_full() {
            return MoveResult::no_move(start);
        }

        // 1. Empty board: the grid's centre
        if board.is_board_empty() {
            let center = board.dims().center();
            return MoveResult::tactical(center, 0, SearchType::Opening, start);
        }

        // 2. Our own four always comes before defending
        if let Some(pos) = find_winning_move(board, color) {
            return MoveResult::tactical(pos, TacticScore::WIN, SearchType::ImmediateWin, start);
        }

        // 3. Opponent wins next move unless we take this cell
        if let Some(pos) = find_forced_block(board, color) {
            return MoveResult::tactical(pos, TacticScore::BLOCK_WIN, SearchType::Defense, start);
        }

        // 4. Strong enough one-ply move
        let candidates = generate_candidates(board, self.config.candidate_radius);
        if let Some((pos, score)) = best_strategic_move(board, &candidates, color) {
            if score >= self.config.strategic_threshold {
                return MoveResult::tactical(pos, score, SearchType::Strategic, start);
            }
            debug!(
                "strategic best ({}, {}) scored {} below threshold {}",
                pos.row, pos.col, score, self.config.strategic_threshold
            );
        }

        // 5. Search
        let profile = difficulty.profile();
        let mut searcher = Searcher::new(profile.depth, profile.width)
            .with_radius(self.config.candidate_radius)
            .with_max_nodes(self.config.max_nodes);
        MoveResult::from_alphabeta(searcher.search(board, color), start)
    }
}
