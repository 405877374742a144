//! Incremental run tracking: the win-detection core.
//!
//! For every stone a player has on the board, the tracker stores the length
//! of the maximal contiguous run through that stone along each of the four
//! line directions. A placement updates only the runs it touches, so the
//! longest-run query never rescans the board.
//!
//! Invariant: every stone of one maximal run holds the same length value for
//! that direction, equal to the run's total stone count. `record_placement`
//! re-establishes this after every move, including merges that bridge two
//! previously separate runs.

use crate::board::{Pos, Stone};
use std::collections::HashMap;

/// The four line-families a run can lie on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Backslash diagonal: row and column grow together
    DiagonalDown,
    /// Forward-slash diagonal: row grows as column shrinks
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Representative unit step; runs are symmetric, so one of the two
    /// opposing steps per family is enough
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Per-direction run lengths for one occupied cell
type DirLengths = [u16; 4];

/// Tracks run lengths per player and the longest run seen so far.
///
/// The maps are keyed by structural position equality; a key being present
/// means that player occupies the cell. Lifecycle is tied to the game: built
/// at game start, mutated only through `record_placement`, discarded whole on
/// reset.
#[derive(Debug, Clone, Default)]
pub struct RunTracker {
    runs: [HashMap<Pos, DirLengths>; 2],
    max_run: [u16; 2],
}

#[inline]
fn slot(player: Stone) -> usize {
    debug_assert!(player.is_player(), "run tracker only tracks player stones");
    match player {
        Stone::White => 1,
        _ => 0,
    }
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly placed stone and return the player's updated longest
    /// run.
    ///
    /// Precondition: `pos` just transitioned Empty -> `player` on the board.
    /// There is no removal or overwrite; calling this twice for one cell is a
    /// contract breach, not a recoverable error.
    pub fn record_placement(&mut self, pos: Pos, player: Stone) -> u16 {
        let idx = slot(player);
        let runs = &mut self.runs[idx];
        debug_assert!(!runs.contains_key(&pos), "cell {pos} already tracked");

        // Phase one: compute the merged length per direction from the
        // neighbors' pre-update values. A neighbor on each side contributes
        // its whole run, so filling a gap sums left + 1 + right.
        let mut lengths: DirLengths = [1; 4];
        for dir in Direction::ALL {
            let d = dir.index();
            let (dr, dc) = dir.step();
            let side = |sr: i32, sc: i32| -> u16 {
                pos.offset(sr, sc)
                    .and_then(|n| runs.get(&n))
                    .map_or(0, |lens| lens[d])
            };
            lengths[d] += side(-dr, -dc) + side(dr, dc);
        }
        runs.insert(pos, lengths);

        // Phase two: propagate each merged length to every stone of the run,
        // walking outward from the placed cell one side at a time. Each walk
        // starts fresh at the immediate neighbor and recomputes the position
        // per step, so it reaches the true run ends even though the map is
        // being rewritten underneath it.
        for dir in Direction::ALL {
            let d = dir.index();
            let (dr, dc) = dir.step();
            Self::propagate(runs, pos, (-dr, -dc), d, lengths[d]);
            Self::propagate(runs, pos, (dr, dc), d, lengths[d]);
        }

        let best = lengths.into_iter().max().unwrap_or(1);
        if best > self.max_run[idx] {
            self.max_run[idx] = best;
        }
        self.max_run[idx]
    }

    /// Overwrite run lengths along one side until the run ends (the next
    /// position is absent from the map)
    fn propagate(
        runs: &mut HashMap<Pos, DirLengths>,
        from: Pos,
        step: (i32, i32),
        dir_index: usize,
        length: u16,
    ) {
        let mut cur = from;
        while let Some(next) = cur.offset(step.0, step.1) {
            match runs.get_mut(&next) {
                Some(lengths) => {
                    lengths[dir_index] = length;
                    cur = next;
                }
                None => break,
            }
        }
    }

    /// Longest run this player has achieved so far. Non-decreasing within a
    /// game; 0 before the first placement.
    #[inline]
    pub fn max_run(&self, player: Stone) -> u16 {
        self.max_run[slot(player)]
    }

    /// Run length stored for one cell and direction; None if the player does
    /// not occupy the cell
    pub fn run_length(&self, pos: Pos, player: Stone, dir: Direction) -> Option<u16> {
        self.runs[slot(player)].get(&pos).map(|lens| lens[dir.index()])
    }
}
