//! Engine error taxonomy.
//!
//! Only `InvalidRank`, `InvalidPlayer` and `InvalidConfig` indicate a defect
//! in the caller.
//! Everything else is a recoverable move rejection: the game state is left
//! exactly as it was and the same player may try again.
//!
//! An empty deck is deliberately not represented here. Drawing from an empty
//! deck yields `None` and refilling a hand simply stops short.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Which index of a submitted move was out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// Index into the acting player's hand.
    Card,
    /// Index into a player's three caravans.
    Caravan,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Card => write!(f, "card"),
            IndexKind::Caravan => write!(f, "caravan"),
        }
    }
}

/// Errors reported by the Caravan engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CaravanError {
    /// A card was constructed with a rank outside 1..=13.
    #[error("invalid rank {rank}: must be between 1 and 13")]
    InvalidRank { rank: u8 },

    /// A player ID outside the two seats.
    #[error("invalid player {id}: Caravan has seats 0 and 1")]
    InvalidPlayer { id: u8 },

    /// A game configuration cannot produce a playable game.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A move referenced a card or caravan that does not exist.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange { what: IndexKind, index: usize, len: usize },

    /// The card may not be placed on the target caravan.
    #[error("{card} cannot be played on caravan {caravan}")]
    IllegalMove { card: Card, caravan: usize },

    /// A player tried to move out of turn.
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    /// A move was submitted after the game was decided.
    #[error("game is over: {winner} has won")]
    GameOver { winner: PlayerId },

    /// The move targeted the opponent's board while that rule is disabled.
    #[error("placing cards on opponent caravans is disabled")]
    OpponentCaravanLocked,
}

impl CaravanError {
    /// Whether the same player keeps the turn and may retry.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CaravanError::InvalidRank { .. }
                | CaravanError::InvalidPlayer { .. }
                | CaravanError::InvalidConfig(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CaravanError>;
