//! Uniform random move source.

use super::MovePolicy;
use crate::core::{GameRng, PlayerId};
use crate::game::{GameState, Move};

/// Picks uniformly among the moves the engine would accept.
///
/// Owns its own `GameRng`, so a policy seed and a game seed together
/// reproduce a whole game.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, game: &GameState, player: PlayerId) -> Option<Move> {
        let moves = game.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range_usize(0..moves.len());
        Some(moves[idx])
    }
}
