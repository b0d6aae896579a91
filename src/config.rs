//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::board::{BoardDims, BoardError, DEFAULT_COLS, DEFAULT_ROWS};
use crate::eval::TacticScore;
use crate::search::{CANDIDATE_RADIUS, DEFAULT_MAX_NODES};

/// Tunables for [`AIEngine`](crate::engine::AIEngine).
///
/// Missing JSON fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Chebyshev radius for candidate moves
    pub candidate_radius: u8,
    /// Minimum strategic score played without a search
    pub strategic_threshold: i32,
    /// Node budget per search
    pub max_nodes: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: usize::from(DEFAULT_ROWS),
            cols: usize::from(DEFAULT_COLS),
            candidate_radius: CANDIDATE_RADIUS,
            strategic_threshold: TacticScore::BLOCK_OPEN_3,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_dims(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_candidate_radius(mut self, radius: u8) -> Self {
        self.candidate_radius = radius;
        self
    }

    #[must_use]
    pub fn with_strategic_threshold(mut self, threshold: i32) -> Self {
        self.strategic_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Validated grid size
    pub fn dims(&self) -> Result<BoardDims, BoardError> {
        BoardDims::new(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (30, 18));
        assert_eq!(config.candidate_radius, 2);
        assert_eq!(config.strategic_threshold, TacticScore::BLOCK_OPEN_3);
        assert_eq!(config.max_nodes, 50_000);
        assert_eq!(config.dims().unwrap(), BoardDims::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"rows": 19, "max_nodes": 1000}"#).unwrap();
        assert_eq!(config.rows, 19);
        assert_eq!(config.cols, 18);
        assert_eq!(config.max_nodes, 1000);
        assert_eq!(config.candidate_radius, CANDIDATE_RADIUS);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_dims(15, 15)
            .with_candidate_radius(1)
            .with_strategic_threshold(TacticScore::CREATE_4)
            .with_max_nodes(10);
        assert_eq!(config.dims().unwrap().center(), crate::board::Pos::new(7, 7));
        assert_eq!(config.candidate_radius, 1);
        assert_eq!(config.strategic_threshold, TacticScore::CREATE_4);
        assert_eq!(config.max_nodes, 10);
    }

    #[test]
    fn test_invalid_dims_rejected() {
        let config = EngineConfig::default().with_dims(0, 18);
        assert_eq!(
            config.dims(),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 18 })
        );
        assert!(EngineConfig::default().with_dims(30, 300).dims().is_err());
    }
}
