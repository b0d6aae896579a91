//! Game rules: five or more in a row wins

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five_positions, has_five, has_five_at, run_length_at};
