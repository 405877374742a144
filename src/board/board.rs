//! Board structure with occupancy and side-to-move tracking

use super::{Pos, Stone, MAXSIZE, MIN_SIZE};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {0}: must be between {MIN_SIZE} and {MAXSIZE}")]
    InvalidSize(usize),
    #[error("point {0} is already occupied")]
    Occupied(Pos),
}

/// Game board: per-cell occupancy plus the player to move.
///
/// Cells are stored in a dense row-major vector sized at `reset`. The board
/// never clears a placed stone; the only way back to Empty is a full reset.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    stones: usize,
    /// Player to move. Toggled by the move-application layer, not by `place`.
    pub current_player: Stone,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAXSIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
            current_player: Stone::Black,
        })
    }

    /// Reallocate for an N x N board, all cells Empty, Black to move
    pub fn reset(&mut self, size: usize) -> Result<(), BoardError> {
        *self = Self::new(size)?;
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (1..=self.size).contains(&(pos.row as usize)) && (1..=self.size).contains(&(pos.col as usize))
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize - 1) * self.size + (pos.col as usize - 1)
    }

    /// Get stone at position; Border for off-board positions
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.in_bounds(pos) {
            return Stone::Border;
        }
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty in-bounds cell.
    ///
    /// Bounds are the caller's responsibility; malformed coordinates must be
    /// rejected before reaching this operation.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        debug_assert!(stone.is_player(), "only player stones can be placed");
        debug_assert!(self.in_bounds(pos), "placement out of bounds");
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.stones += 1;
        Ok(())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// True once no Empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.size * self.size
    }

    /// All Empty cells in row-major order
    pub fn empty_points(&self) -> Vec<Pos> {
        let mut points = Vec::with_capacity(self.size * self.size - self.stones);
        for row in 1..=self.size {
            for col in 1..=self.size {
                let pos = Pos::new(row as u8, col as u8);
                if self.is_empty(pos) {
                    points.push(pos);
                }
            }
        }
        points
    }

    /// Render the occupancy grid, top row first: X black, O white, . empty
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in (1..=self.size).rev() {
            for col in 1..=self.size {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    _ => '.',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
