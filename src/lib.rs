//! Five-in-a-row move-selection engine
//!
//! Picks the next stone for an automated opponent on a large fixed grid
//! (30 rows by 18 columns unless configured otherwise):
//! - 5 or more in a row wins
//! - Tactics first: win, then block, then forks and strong one-ply moves
//! - Depth-limited alpha-beta search otherwise, sized by difficulty tier
//!
//! # Architecture
//!
//! - [`board`]: Board built from a stone list, with bitboards and push/undo
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Pattern scanner and position evaluation
//! - [`search`]: Candidates, critical moves, strategic scorer, alpha-beta
//! - [`difficulty`]: Tier to search depth and width
//! - [`engine`]: Main AI engine integrating all components
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{select_move, Difficulty, Player, Pos, Stone};
//!
//! // The first move goes to the centre of the grid
//! let first = select_move(&[], Difficulty::Medium, Player::Black).unwrap();
//! assert_eq!(first, Some(Pos::new(15, 9)));
//!
//! // Four in a row with an open end: take the win
//! let stones: Vec<Stone> = (5..9).map(|c| Stone::new(10, c, Player::White)).collect();
//! let win = select_move(&stones, Difficulty::Easy, Player::White).unwrap();
//! assert_eq!(win, Some(Pos::new(10, 9)));
//! ```

pub mod board;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardDims, BoardError, Player, Pos, Stone};
pub use config::EngineConfig;
pub use difficulty::{Difficulty, SearchProfile};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::EngineError;

/// Choose the next stone for `player` on the default grid.
///
/// Returns `Ok(None)` when no empty cell remains, which callers treat as a
/// draw. Use [`AIEngine::with_config`] for other grid sizes or budgets.
pub fn select_move(
    stones: &[Stone],
    difficulty: Difficulty,
    player: Player,
) -> Result<Option<Pos>, EngineError> {
    AIEngine::new().select_move(stones, difficulty, player)
}
