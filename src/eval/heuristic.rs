//! Heuristic evaluation function for board positions
//!
//! This is the leaf function of the minimax search. It scores a board from
//! one player's perspective based on:
//! - Win/loss detection
//! - Pattern counts for both sides (fours, threes, twos)
//! - Pressure: own stones placed close to the opponent's
//! - Encirclement of opponent stones

use crate::board::{Board, Player, DIRECTIONS};
use crate::rules::has_five;

use super::patterns::PatternScore;
use super::scanner::{scan_patterns, ThreatKind, ThreatMap};

/// Pressure radiated by an opponent stone at each Manhattan distance
const PRESSURE_BY_DISTANCE: [i32; 5] = [0, 40, 24, 12, 4];

/// Manhattan reach of the pressure map
const PRESSURE_RADIUS: i32 = 4;

/// Axes an opponent stone must have closed to count as encircled
const ENCIRCLED_AXES: usize = 3;

/// Evaluate the board from the perspective of `color`.
///
/// Returns `PatternScore::WIN` when `color` has five (or more) in a row,
/// `-PatternScore::WIN` when the opponent does; higher is better for
/// `color` otherwise.
#[must_use]
pub fn evaluate(board: &Board, color: Player) -> i32 {
    let opponent = color.opponent();

    if has_five(board, color) {
        return PatternScore::WIN;
    }
    if has_five(board, opponent) {
        return -PatternScore::WIN;
    }

    let mine = scan_patterns(board, color);
    let theirs = scan_patterns(board, opponent);

    pattern_score(&mine, &theirs) + pressure_score(board, color) + encirclement_score(board, color)
}

/// Weighted threat counts: own threats added, opponent threats subtracted
/// at the heavier defensive weights.
fn pattern_score(mine: &ThreatMap, theirs: &ThreatMap) -> i32 {
    ThreatKind::ALL
        .iter()
        .map(|&kind| {
            count_i32(mine.count(kind)) * kind.offense_weight()
                - count_i32(theirs.count(kind)) * kind.defense_weight()
        })
        .sum()
}

/// Sum of the opponent's pressure map over `color`'s own stones.
///
/// Rewards keeping stones near the opponent's cluster.
pub fn pressure_score(board: &Board, color: Player) -> i32 {
    let dims = board.dims();
    let mut heat = vec![0i32; dims.cells()];

    for stone in board.stones(color.opponent()) {
        for dr in -PRESSURE_RADIUS..=PRESSURE_RADIUS {
            let span = PRESSURE_RADIUS - dr.abs();
            for dc in -span..=span {
                let dist = (dr.abs() + dc.abs()) as usize;
                let (r, c) = stone.step(dr, dc, 1);
                if let Some(pos) = dims.pos(r, c) {
                    heat[dims.index(pos)] += PRESSURE_BY_DISTANCE[dist];
                }
            }
        }
    }

    board.stones(color).map(|pos| heat[dims.index(pos)]).sum()
}

/// Bonus per opponent stone that is boxed in on at least 3 of its 4 axes.
///
/// An axis is closed when both neighbours along it are occupied (by either
/// side) or lie off the board.
pub fn encirclement_score(board: &Board, color: Player) -> i32 {
    let encircled = board
        .stones(color.opponent())
        .filter(|&pos| {
            let closed_axes = DIRECTIONS
                .iter()
                .filter(|&&(dr, dc)| {
                    [1, -1].iter().all(|&sign| {
                        let (r, c) = pos.step(dr, dc, sign);
                        !board.cell(r, c).is_empty()
                    })
                })
                .count();
            closed_axes >= ENCIRCLED_AXES
        })
        .count();

    count_i32(encircled) * PatternScore::ENCIRCLED
}

#[inline]
fn count_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], player: Player) {
        for &(r, c) in stones {
            board.place(Pos::new(r, c), player);
        }
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::default(), Player::Black), 0);
    }

    #[test]
    fn test_evaluate_winning_position() {
        let mut board = Board::default();
        place_all(&mut board, &[(9, 2), (9, 3), (9, 4), (9, 5), (9, 6)], Player::Black);
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4), (10, 5)], Player::White);

        assert_eq!(evaluate(&board, Player::Black), PatternScore::WIN);
        assert_eq!(evaluate(&board, Player::White), -PatternScore::WIN);
    }

    #[test]
    fn test_overline_is_terminal() {
        let mut board = Board::default();
        place_all(&mut board, &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)], Player::White);
        assert_eq!(evaluate(&board, Player::Black), -PatternScore::WIN);
    }

    #[test]
    fn test_evaluate_open_three_positive() {
        let mut board = Board::default();
        place_all(&mut board, &[(9, 4), (9, 5), (9, 6)], Player::Black);
        let score = evaluate(&board, Player::Black);
        assert_eq!(score, PatternScore::THREE_OPEN);
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut board = Board::default();
        place_all(&mut board, &[(9, 4), (9, 5), (9, 6)], Player::White);
        let score = evaluate(&board, Player::Black);
        assert_eq!(score, -PatternScore::OPP_THREE_OPEN);
    }

    #[test]
    fn test_opponent_threat_weighs_more() {
        // Mirror positions: the same open three is worth less to its owner
        // than it costs the other side
        let mut board = Board::default();
        place_all(&mut board, &[(5, 4), (5, 5), (5, 6)], Player::Black);
        place_all(&mut board, &[(20, 4), (20, 5), (20, 6)], Player::White);
        assert!(evaluate(&board, Player::Black) < 0);
        assert!(evaluate(&board, Player::White) < 0);
    }

    #[test]
    fn test_pressure_decays_with_distance() {
        let mut near = Board::default();
        near.place(Pos::new(10, 10), Player::White);
        near.place(Pos::new(10, 11), Player::Black);

        let mut far = Board::default();
        far.place(Pos::new(10, 10), Player::White);
        far.place(Pos::new(12, 12), Player::Black);

        let mut out_of_reach = Board::default();
        out_of_reach.place(Pos::new(10, 10), Player::White);
        out_of_reach.place(Pos::new(10, 15), Player::Black);

        assert_eq!(pressure_score(&near, Player::Black), 40);
        assert_eq!(pressure_score(&far, Player::Black), 4);
        assert_eq!(pressure_score(&out_of_reach, Player::Black), 0);
    }

    #[test]
    fn test_pressure_accumulates_over_opponent_stones() {
        let mut board = Board::default();
        place_all(&mut board, &[(10, 9), (10, 11)], Player::White);
        board.place(Pos::new(10, 10), Player::Black);
        assert_eq!(pressure_score(&board, Player::Black), 80);
        // White's own stones feel Black's single stone
        assert_eq!(pressure_score(&board, Player::White), 80);
    }

    #[test]
    fn test_encirclement_bonus() {
        let mut board = Board::default();
        board.place(Pos::new(10, 10), Player::White);
        // Close →, ↓ and ↘ axes on both sides
        place_all(
            &mut board,
            &[(10, 9), (10, 11), (9, 10), (11, 10), (9, 9), (11, 11)],
            Player::Black,
        );
        assert_eq!(encirclement_score(&board, Player::Black), PatternScore::ENCIRCLED);
    }

    #[test]
    fn test_encirclement_needs_three_axes() {
        let mut board = Board::default();
        board.place(Pos::new(10, 10), Player::White);
        place_all(&mut board, &[(10, 9), (10, 11), (9, 10), (11, 10)], Player::Black);
        assert_eq!(encirclement_score(&board, Player::Black), 0);
    }

    #[test]
    fn test_encirclement_counts_board_edge() {
        let mut board = Board::default();
        // Corner stone: ↓ axis and both diagonals touch the edge
        board.place(Pos::new(0, 0), Player::White);
        place_all(&mut board, &[(1, 0), (1, 1)], Player::Black);
        assert_eq!(encirclement_score(&board, Player::Black), PatternScore::ENCIRCLED);
    }
}
