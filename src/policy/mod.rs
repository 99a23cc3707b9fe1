//! Move sources.
//!
//! Anything that decides moves (a human behind a prompt, a bot) talks to the
//! engine through `MovePolicy`: it looks at the game and returns a `Move` for
//! `GameState::submit`. The engine re-validates whatever comes back.
//!
//! - `RandomPolicy`: uniform choice among currently legal moves
//! - `play_out`: drive a game to completion with one policy per seat

mod random;

pub use random::RandomPolicy;

use crate::core::PlayerId;
use crate::game::{GameState, Move};

/// Chooses moves for a player.
pub trait MovePolicy {
    /// Pick a move for `player`, or `None` if it has nothing to play.
    fn choose_move(&mut self, game: &GameState, player: PlayerId) -> Option<Move>;
}

/// How a played-out game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A player brought enough caravans into range.
    Won(PlayerId),
    /// This player had to move but had no legal move.
    Stalled(PlayerId),
    /// The move limit was reached first.
    MoveLimit,
}

/// Play `game` forward until it is decided, a player is stuck, or
/// `max_moves` legal moves have been made.
///
/// `first` moves for player 0, `second` for player 1. A policy that returns
/// a rejected move counts as stalled, since retrying would loop forever.
pub fn play_out<A: MovePolicy, B: MovePolicy>(
    game: &mut GameState,
    first: &mut A,
    second: &mut B,
    max_moves: usize,
) -> PlayOutcome {
    for _ in 0..max_moves {
        if let Some(winner) = game.winner() {
            return PlayOutcome::Won(winner);
        }

        let active = game.current_player();
        let choice = match active.index() {
            0 => first.choose_move(game, active),
            _ => second.choose_move(game, active),
        };
        let Some(mv) = choice else {
            return PlayOutcome::Stalled(active);
        };
        if game.submit(active, mv).is_err() {
            return PlayOutcome::Stalled(active);
        }
    }

    match game.winner() {
        Some(winner) => PlayOutcome::Won(winner),
        None => PlayOutcome::MoveLimit,
    }
}
