//! Outcomes of Face card effects.
//!
//! Face cards do not add value to a caravan. Once placed they act on the
//! caravan they were placed on, and the engine reports what happened as an
//! `EffectResult` rather than printing it.

use serde::{Deserialize, Serialize};

use crate::caravan::Direction;
use crate::cards::Card;

/// What a placed card did to its caravan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectResult {
    /// A Numeral card was placed; it has no effect.
    None,

    /// Jack discarded this Numeral card.
    Removed(Card),

    /// Jack found no Numeral card before it.
    NothingToRemove,

    /// Queen reversed the caravan's direction.
    DirectionFlipped { from: Direction, to: Direction },

    /// Queen was placed while the direction was unset.
    DirectionUnset,

    /// King appended a fresh copy of this Numeral card.
    Duplicated(Card),

    /// King found no Numeral card to copy.
    NothingToDuplicate,
}

impl EffectResult {
    /// Did the effect change the caravan beyond adding the Face card itself?
    #[must_use]
    pub fn changed_caravan(self) -> bool {
        matches!(
            self,
            EffectResult::Removed(_)
                | EffectResult::DirectionFlipped { .. }
                | EffectResult::Duplicated(_)
        )
    }

    /// The card this effect removed from play, if any.
    #[must_use]
    pub fn removed_card(self) -> Option<Card> {
        match self {
            EffectResult::Removed(card) => Some(card),
            _ => None,
        }
    }

    /// The card this effect brought into play, if any.
    #[must_use]
    pub fn created_card(self) -> Option<Card> {
        match self {
            EffectResult::Duplicated(card) => Some(card),
            _ => None,
        }
    }
}

impl std::fmt::Display for EffectResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectResult::None => write!(f, "no effect"),
            EffectResult::Removed(card) => write!(f, "Jack removed {}", card),
            EffectResult::NothingToRemove => write!(f, "Jack found nothing to remove"),
            EffectResult::DirectionFlipped { from, to } => {
                write!(f, "Queen turned {} into {}", from, to)
            }
            EffectResult::DirectionUnset => write!(f, "Queen had no direction to flip"),
            EffectResult::Duplicated(card) => write!(f, "King doubled {}", card),
            EffectResult::NothingToDuplicate => write!(f, "King found nothing to double"),
        }
    }
}
