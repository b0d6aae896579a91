//! Move search
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Critical move detection (immediate win, forced block)
//! - One-ply strategic scoring with fork detection
//! - Minimax with alpha-beta pruning and a node budget

pub mod alphabeta;
pub mod candidates;
pub mod critical;
pub mod strategic;

pub use alphabeta::{anti_connection_penalty, SearchResult, Searcher, DEFAULT_MAX_NODES};
pub use candidates::{generate_candidates, CANDIDATE_RADIUS};
pub use critical::{
    find_five_completion, find_forced_block, find_run_completion, find_winning_move,
};
pub use strategic::{best_strategic_move, line_info, score_candidate, LineInfo};
