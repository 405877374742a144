//! Move generation for the engine's own color
//!
//! The GTP layer asks the engine for a move on `genmove`. Move quality is not
//! a goal here; the engine picks uniformly among the legal moves, which keeps
//! the protocol layer honest and the games finite. The RNG is seedable so
//! sessions can be replayed in tests.

use crate::board::{Pos, Stone};
use crate::game::GameState;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Engine identity and move picker
#[derive(Debug)]
pub struct Engine {
    /// Komi, kept for GTP compatibility; has no effect on the rules
    pub komi: f32,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            komi: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed RNG seed, for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self {
            komi: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Engine name reported over GTP
    pub fn name(&self) -> &'static str {
        "gomoku"
    }

    /// Engine version reported over GTP
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Pick a move for the given color, or None when no legal move exists
    pub fn get_move(&mut self, game: &GameState, _player: Stone) -> Option<Pos> {
        game.legal_moves().choose(&mut self.rng).copied()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Move, Outcome};

    #[test]
    fn test_version_is_nonempty() {
        let engine = Engine::new();
        assert!(!engine.version().is_empty());
        assert_eq!(engine.name(), "gomoku");
    }

    #[test]
    fn test_move_is_legal() {
        let mut engine = Engine::with_seed(7);
        let game = GameState::new(3).unwrap();
        let pos = engine.get_move(&game, Stone::Black).unwrap();
        assert!(game.legal_moves().contains(&pos));
    }

    #[test]
    fn test_no_move_once_game_is_over() {
        let mut engine = Engine::with_seed(7);
        let mut game = GameState::new(9).unwrap();
        for col in 1..=5 {
            game.apply_move(Move::Place(Pos::new(1, col)), Stone::Black);
        }
        assert_eq!(engine.get_move(&game, Stone::White), None);
    }

    #[test]
    fn test_seeded_engine_is_deterministic() {
        let game = GameState::new(9).unwrap();
        let a = Engine::with_seed(42).get_move(&game, Stone::Black);
        let b = Engine::with_seed(42).get_move(&game, Stone::Black);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_game_reaches_a_result() {
        use crate::game::GameStatus;

        let mut engine = Engine::with_seed(1);
        let mut game = GameState::new(5).unwrap();
        let mut color = Stone::Black;
        // 25 cells: a full random game must end in a win or a draw
        for _ in 0..25 {
            let Some(pos) = engine.get_move(&game, color) else {
                break;
            };
            match game.apply_move(Move::Place(pos), color) {
                Outcome::Continue => color = color.opponent(),
                Outcome::Win(_) | Outcome::Draw => break,
                Outcome::Illegal(reason) => panic!("engine produced illegal move: {reason}"),
            }
        }
        assert_ne!(game.status(), GameStatus::InProgress);
    }
}
