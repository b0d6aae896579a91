//! Scores for board patterns
//!
//! `PatternScore` weights the evaluator's threat counts; `TacticScore` holds
//! the one-ply tiers used by the strategic scorer.

use super::scanner::ThreatKind;

/// Weights for full-board evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row on the board: dominates every other term
    pub const WIN: i32 = 10_000_000;

    // Own threats
    pub const FOUR_DIRECT: i32 = 100_000;
    pub const FOUR_BROKEN: i32 = 80_000;
    pub const THREE_OPEN: i32 = 10_000;
    pub const THREE_BROKEN: i32 = 5_000;
    pub const TWO_OPEN: i32 = 1_000;
    pub const TWO_BROKEN: i32 = 200;

    // Opponent threats, subtracted. Each is 1.5-2x its offensive counterpart
    // so blocking is never cheaper than building at the same run length.
    pub const OPP_FOUR_DIRECT: i32 = 200_000;
    pub const OPP_FOUR_BROKEN: i32 = 150_000;
    pub const OPP_THREE_OPEN: i32 = 20_000;
    pub const OPP_THREE_BROKEN: i32 = 9_000;
    pub const OPP_TWO_OPEN: i32 = 1_800;
    pub const OPP_TWO_BROKEN: i32 = 350;

    /// Opponent stone boxed in on at least 3 of its 4 axes
    pub const ENCIRCLED: i32 = 400;
}

impl ThreatKind {
    /// Weight of one of our own threats of this kind
    pub fn offense_weight(self) -> i32 {
        match self {
            // Terminal, handled before pattern weighting
            ThreatKind::Five => 0,
            ThreatKind::FourDirect => PatternScore::FOUR_DIRECT,
            ThreatKind::FourBroken => PatternScore::FOUR_BROKEN,
            ThreatKind::ThreeOpen => PatternScore::THREE_OPEN,
            ThreatKind::ThreeBroken => PatternScore::THREE_BROKEN,
            ThreatKind::TwoOpen => PatternScore::TWO_OPEN,
            ThreatKind::TwoBroken => PatternScore::TWO_BROKEN,
        }
    }

    /// Weight of one opponent threat of this kind
    pub fn defense_weight(self) -> i32 {
        match self {
            ThreatKind::Five => 0,
            ThreatKind::FourDirect => PatternScore::OPP_FOUR_DIRECT,
            ThreatKind::FourBroken => PatternScore::OPP_FOUR_BROKEN,
            ThreatKind::ThreeOpen => PatternScore::OPP_THREE_OPEN,
            ThreatKind::ThreeBroken => PatternScore::OPP_THREE_BROKEN,
            ThreatKind::TwoOpen => PatternScore::OPP_TWO_OPEN,
            ThreatKind::TwoBroken => PatternScore::OPP_TWO_BROKEN,
        }
    }
}

/// One-ply tactical tiers for candidate scoring.
///
/// Ordering that must hold: `CREATE_4 > BLOCK_OPEN_3 > CREATE_3 > BLOCK_2`.
pub struct TacticScore;

impl TacticScore {
    /// Placing here completes five
    pub const WIN: i32 = 10_000_000;
    /// Placing here takes the opponent's five-completing cell. Kept below
    /// `WIN` so a gapped win is never traded for a block.
    pub const BLOCK_WIN: i32 = 9_000_000;

    /// Two or more qualifying lines from one stone (4+4, 4+3, 3+3)
    pub const CREATE_DOUBLE: i32 = 300_000;
    /// A four with at least one open end
    pub const CREATE_4: i32 = 100_000;
    /// Two or more denials from one stone
    pub const BLOCK_DOUBLE: i32 = 60_000;
    /// Denies the opponent an open four
    pub const BLOCK_OPEN_3: i32 = 50_000;
    /// An open three
    pub const CREATE_3: i32 = 10_000;
    /// Denies the opponent an open three
    pub const BLOCK_2: i32 = 5_000;

    /// Any stone inside the 5x5 neighbourhood
    pub const NEIGHBOR: i32 = 40;
    /// Centre bonus by Chebyshev distance band: (max distance, bonus)
    pub const CENTER_BANDS: [(i32, i32); 3] = [(2, 30), (5, 20), (8, 10)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::OPP_FOUR_DIRECT * 10);
        assert!(PatternScore::FOUR_DIRECT > PatternScore::FOUR_BROKEN);
        assert!(PatternScore::FOUR_BROKEN > PatternScore::THREE_OPEN);
        assert!(PatternScore::THREE_OPEN > PatternScore::THREE_BROKEN);
        assert!(PatternScore::THREE_BROKEN > PatternScore::TWO_OPEN);
        assert!(PatternScore::TWO_OPEN > PatternScore::TWO_BROKEN);
    }

    #[test]
    fn test_defense_outweighs_offense() {
        for kind in ThreatKind::ALL {
            if kind == ThreatKind::Five {
                continue;
            }
            let offense = kind.offense_weight();
            let defense = kind.defense_weight();
            assert!(
                defense * 2 >= offense * 3 && defense <= offense * 2,
                "{:?}: defense {} should be 1.5-2x offense {}",
                kind,
                defense,
                offense
            );
        }
    }

    #[test]
    fn test_tactic_tier_ordering() {
        assert!(TacticScore::WIN > TacticScore::BLOCK_WIN);
        assert!(TacticScore::BLOCK_WIN > TacticScore::CREATE_DOUBLE + TacticScore::CREATE_4 * 4);
        assert!(TacticScore::CREATE_4 > TacticScore::BLOCK_OPEN_3);
        assert!(TacticScore::BLOCK_OPEN_3 > TacticScore::CREATE_3);
        assert!(TacticScore::CREATE_3 > TacticScore::BLOCK_2);
        // Positional terms never lift a candidate across a tier
        let max_positional = TacticScore::NEIGHBOR + TacticScore::CENTER_BANDS[0].1;
        assert!(max_positional < TacticScore::BLOCK_2);
    }
}
