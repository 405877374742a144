//! Game session state: board plus run tracker plus status
//!
//! One `GameState` owns everything a single game needs. Moves enter through
//! [`GameState::apply_move`], which validates, mutates the board, feeds the
//! run tracker, and reports the outcome. A rejected move leaves every piece
//! of state exactly as it was.

use crate::board::{Board, BoardError, Pos, Stone};
use crate::rules::{check_winner, is_draw, RunTracker};
use thiserror::Error;
use tracing::debug;

/// A move request: place a stone or pass the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Pass,
    Place(Pos),
}

/// Why a move was rejected. The game state is untouched in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("point {0} is already occupied")]
    Occupied(Pos),
    #[error("point {0} is outside the board")]
    OutOfBounds(Pos),
    #[error("the game is already over")]
    GameOver,
}

/// Result of applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Stone),
    Draw,
    Illegal(IllegalMove),
}

/// Current status of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    tracker: RunTracker,
    status: GameStatus,
}

impl GameState {
    /// Start a new game on an N x N board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            tracker: RunTracker::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Discard all state and start over at the given size
    pub fn reset(&mut self, size: usize) -> Result<(), BoardError> {
        *self = Self::new(size)?;
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Stone {
        self.board.current_player
    }

    /// Longest run this player has achieved so far
    #[inline]
    pub fn max_run(&self, player: Stone) -> u16 {
        self.tracker.max_run(player)
    }

    /// Apply a move for the given color.
    ///
    /// The color is taken at face value (GTP allows setup moves out of
    /// turn); after any applied move the opponent is to move. A pass changes
    /// only the side to move.
    pub fn apply_move(&mut self, mv: Move, player: Stone) -> Outcome {
        debug_assert!(player.is_player(), "moves need a player color");
        if self.status != GameStatus::InProgress {
            return Outcome::Illegal(IllegalMove::GameOver);
        }

        let pos = match mv {
            Move::Pass => {
                self.board.current_player = player.opponent();
                return Outcome::Continue;
            }
            Move::Place(pos) => pos,
        };

        if !self.board.in_bounds(pos) {
            return Outcome::Illegal(IllegalMove::OutOfBounds(pos));
        }
        if self.board.place(pos, player).is_err() {
            return Outcome::Illegal(IllegalMove::Occupied(pos));
        }

        let max = self.tracker.record_placement(pos, player);
        self.board.current_player = player.opponent();
        debug!(%pos, ?player, max, "placed stone");

        // Win is checked before the full-board case: a move that completes a
        // five while filling the last cell wins, it does not draw
        if let Some(winner) = check_winner(&self.tracker) {
            self.status = GameStatus::Won(winner);
            Outcome::Win(winner)
        } else if is_draw(&self.board, &self.tracker) {
            self.status = GameStatus::Draw;
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }

    /// Every empty cell, or nothing once the game is decided
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        self.board.empty_points()
    }
}
