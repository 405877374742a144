//! Gomoku engine speaking the Go Text Protocol
//!
//! A five-in-a-row engine built around incremental win detection: instead of
//! rescanning the board after every move, a run tracker keeps the length of
//! every contiguous run per player and direction and updates only the runs a
//! placement touches. The GTP layer is a thin line-oriented front end over
//! the game session.
//!
//! # Architecture
//!
//! - [`board`]: occupancy grid, positions, side to move
//! - [`rules`]: run tracking and win/draw determination
//! - [`game`]: one game session, move application, legal moves
//! - [`engine`]: move generation for `genmove`
//! - [`gtp`]: command vocabulary, coordinate codec, connection loop
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, Move, Outcome, Pos, Stone};
//!
//! let mut game = GameState::new(9).unwrap();
//! for col in 1..=4 {
//!     game.apply_move(Move::Place(Pos::new(5, col)), Stone::Black);
//! }
//! assert_eq!(game.max_run(Stone::Black), 4);
//!
//! let outcome = game.apply_move(Move::Place(Pos::new(5, 5)), Stone::Black);
//! assert_eq!(outcome, Outcome::Win(Stone::Black));
//! ```

pub mod board;
pub mod engine;
pub mod game;
pub mod gtp;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Pos, Stone, DEFAULT_SIZE, MAXSIZE, MIN_SIZE};
pub use engine::Engine;
pub use game::{GameState, GameStatus, IllegalMove, Move, Outcome};
pub use gtp::GtpConnection;
pub use rules::{Direction, RunTracker, WIN_LENGTH};
