//! Position evaluation: pattern scanning, weights and the leaf heuristic

pub mod heuristic;
pub mod patterns;
pub mod scanner;

pub use heuristic::{encirclement_score, evaluate, pressure_score};
pub use patterns::{PatternScore, TacticScore};
pub use scanner::{scan_patterns, Threat, ThreatKind, ThreatMap};
