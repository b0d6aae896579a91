//! Pattern scanner
//!
//! Finds aligned runs of one player's stones along the four axes and reports
//! them by kind, together with the empty cells that would complete them.
//!
//! A scan starts at a stone only when the cell behind it (opposite the scan
//! direction) is not the same player's. This anchors every physical line to
//! its first stone so it is reported once per direction.

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

/// Kinds of run the scanner reports, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThreatKind {
    /// `XXXXX` with no same-player stone on either side
    Five,
    /// `XXXX.` or `.XXXX`
    FourDirect,
    /// `X.XXX`, `XX.XX`, `XXX.X`
    FourBroken,
    /// `.XXX.`
    ThreeOpen,
    /// `.X.XX.` or `.XX.X.`
    ThreeBroken,
    /// `.XX.`
    TwoOpen,
    /// `.X.X.`
    TwoBroken,
}

impl ThreatKind {
    pub const ALL: [ThreatKind; 7] = [
        ThreatKind::Five,
        ThreatKind::FourDirect,
        ThreatKind::FourBroken,
        ThreatKind::ThreeOpen,
        ThreatKind::ThreeBroken,
        ThreatKind::TwoOpen,
        ThreatKind::TwoBroken,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// One detected run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threat {
    pub kind: ThreatKind,
    /// First stone of the run in scan direction
    pub anchor: Pos,
    /// Index into [`DIRECTIONS`]
    pub direction: usize,
    /// Empty cells that complete the run. "After" comes before "before";
    /// a five has none.
    pub completions: SmallVec<[Pos; 2]>,
}

/// Threats grouped by kind, in scan order within each kind
#[derive(Debug, Clone, Default)]
pub struct ThreatMap {
    threats: [Vec<Threat>; 7],
}

impl ThreatMap {
    #[inline]
    pub fn get(&self, kind: ThreatKind) -> &[Threat] {
        &self.threats[kind.index()]
    }

    #[inline]
    pub fn count(&self, kind: ThreatKind) -> usize {
        self.threats[kind.index()].len()
    }

    /// Completion cells for a kind, in scan order
    pub fn completions(&self, kind: ThreatKind) -> impl Iterator<Item = Pos> + '_ {
        self.get(kind)
            .iter()
            .flat_map(|threat| threat.completions.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.threats.iter().all(Vec::is_empty)
    }

    fn push(&mut self, threat: Threat) {
        self.threats[threat.kind.index()].push(threat);
    }
}

/// Cells along one axis, indexed relative to an anchor stone
struct Line<'a> {
    board: &'a Board,
    origin: Pos,
    dr: i32,
    dc: i32,
    player: Player,
}

impl Line<'_> {
    #[inline]
    fn at(&self, i: i32) -> Cell {
        let (r, c) = self.origin.step(self.dr, self.dc, i);
        self.board.cell(r, c)
    }

    #[inline]
    fn mine(&self, i: i32) -> bool {
        self.at(i).is(self.player)
    }

    #[inline]
    fn empty(&self, i: i32) -> bool {
        self.at(i).is_empty()
    }

    /// Position of an on-board offset. Callers only ask for offsets they have
    /// already seen to be empty or owned.
    #[inline]
    fn pos(&self, i: i32) -> Pos {
        let (r, c) = self.origin.step(self.dr, self.dc, i);
        self.board.dims().pos(r, c).unwrap_or(self.origin)
    }

    /// Offset of the single empty cell in the 5-cell window starting at
    /// `start`, if the window holds exactly four of the player's stones
    fn four_window_gap(&self, start: i32) -> Option<i32> {
        let mut gap = None;
        for i in start..start + 5 {
            match self.at(i) {
                Cell::Stone(p) if p == self.player => {}
                Cell::Empty if gap.is_none() => gap = Some(i),
                _ => return None,
            }
        }
        gap
    }
}

/// Scan every stone of `player` and collect its threats.
#[must_use]
pub fn scan_patterns(board: &Board, player: Player) -> ThreatMap {
    let mut map = ThreatMap::default();
    let mut visited: FxHashSet<(ThreatKind, Pos, usize)> = FxHashSet::default();

    for origin in board.stones(player) {
        for (direction, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
            let line = Line {
                board,
                origin,
                dr,
                dc,
                player,
            };
            if line.mine(-1) {
                continue;
            }

            let found = [
                check_five(&line),
                check_four(&line),
                check_three(&line),
                check_two(&line),
            ];
            for (kind, completions) in found.into_iter().flatten() {
                if visited.insert((kind, origin, direction)) {
                    map.push(Threat {
                        kind,
                        anchor: origin,
                        direction,
                        completions,
                    });
                }
            }
        }
    }

    map
}

type Found = Option<(ThreatKind, SmallVec<[Pos; 2]>)>;

fn check_five(line: &Line) -> Found {
    ((0..5).all(|i| line.mine(i)) && !line.mine(5)).then(|| (ThreatKind::Five, SmallVec::new()))
}

fn check_four(line: &Line) -> Found {
    let mut completions: SmallVec<[Pos; 2]> = SmallVec::new();

    // Window starting at the anchor: XXXX. or an internal gap
    match line.four_window_gap(0) {
        Some(4) => completions.push(line.pos(4)),
        Some(gap) => return Some((ThreatKind::FourBroken, smallvec![line.pos(gap)])),
        None => {}
    }
    // Window opening one cell behind the anchor: .XXXX (not the head of a five)
    if line.four_window_gap(-1) == Some(-1) && !line.mine(4) {
        completions.push(line.pos(-1));
    }

    (!completions.is_empty()).then_some((ThreatKind::FourDirect, completions))
}

fn check_three(line: &Line) -> Found {
    if !line.empty(-1) || !line.mine(0) {
        return None;
    }
    if line.mine(1) && line.mine(2) && line.empty(3) {
        return Some((ThreatKind::ThreeOpen, smallvec![line.pos(3), line.pos(-1)]));
    }
    // .X.XX.
    if line.empty(1) && line.mine(2) && line.mine(3) && line.empty(4) {
        return Some((ThreatKind::ThreeBroken, smallvec![line.pos(1)]));
    }
    // .XX.X.
    if line.mine(1) && line.empty(2) && line.mine(3) && line.empty(4) {
        return Some((ThreatKind::ThreeBroken, smallvec![line.pos(2)]));
    }
    None
}

fn check_two(line: &Line) -> Found {
    if !line.empty(-1) || !line.mine(0) {
        return None;
    }
    if line.mine(1) && line.empty(2) {
        return Some((ThreatKind::TwoOpen, smallvec![line.pos(2), line.pos(-1)]));
    }
    if line.empty(1) && line.mine(2) && line.empty(3) {
        return Some((ThreatKind::TwoBroken, smallvec![line.pos(1)]));
    }
    None
}
