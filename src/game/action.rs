//! Moves and their recorded outcomes.
//!
//! A `Move` is what a move source (a human prompt, the random policy)
//! submits. A `MoveResult` is what the engine hands back for presentation, and
//! a `MoveRecord` is the compact entry kept in the game history.

use serde::{Deserialize, Serialize};

use super::player::Refill;
use crate::caravan::Direction;
use crate::cards::Card;
use crate::core::{PlayerId, PlayerRef};
use crate::rules::EffectResult;

/// A move as submitted by a move source.
///
/// ```
/// use caravan_engine::core::PlayerRef;
/// use caravan_engine::game::Move;
///
/// // Play the first card in hand onto the opponent's middle caravan
/// let mv = Move::new(0, 1, PlayerRef::Opponent);
/// assert_eq!(mv.caravan_index, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index into the acting player's hand.
    pub card_index: usize,
    /// Which of the target player's caravans, 0..=2.
    pub caravan_index: usize,
    /// Whose caravans.
    pub target: PlayerRef,
}

impl Move {
    #[must_use]
    pub fn new(card_index: usize, caravan_index: usize, target: PlayerRef) -> Self {
        Self {
            card_index,
            caravan_index,
            target,
        }
    }
}

/// Everything a presentation layer needs to describe a completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Who moved.
    pub player: PlayerId,
    /// The card taken from hand.
    pub card: Card,
    /// Owner of the caravan the card went to.
    pub target: PlayerId,
    pub caravan_index: usize,
    /// Face card effect, or `EffectResult::None` for Numerals.
    pub effect: EffectResult,
    /// Target caravan direction after the move.
    pub direction: Direction,
    /// Target caravan value after the move.
    pub caravan_value: u32,
    /// How the acting player's hand was replenished.
    pub refill: Refill,
    /// Whose turn it is now.
    pub next_player: PlayerId,
    /// Set if this move decided the game.
    pub winner: Option<PlayerId>,
}

/// A completed move in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    pub card: Card,
    pub target: PlayerId,
    pub caravan_index: usize,
    pub effect: EffectResult,
}

impl MoveRecord {
    /// Build the history entry for a result.
    #[must_use]
    pub fn from_result(turn: u32, result: &MoveResult) -> Self {
        Self {
            turn,
            player: result.player,
            card: result.card,
            target: result.target,
            caravan_index: result.caravan_index,
            effect: result.effect,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "turn {}: {} played {} on {}'s caravan {}",
            self.turn,
            self.player,
            self.card,
            self.target,
            self.caravan_index + 1
        )?;
        if self.effect != EffectResult::None {
            write!(f, " ({})", self.effect)?;
        }
        Ok(())
    }
}
