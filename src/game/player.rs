//! Players: a deck, a hand and three caravans.
//!
//! A card is always in exactly one place: the deck, the hand, or one caravan.
//! Hands and decks are only touched by their owner's own moves; caravans can
//! also receive the opponent's cards when that rule is enabled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::caravan::Caravan;
use crate::cards::{Card, Deck};
use crate::core::{PlayerId, CARAVANS_PER_PLAYER};

/// Outcome of refilling a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refill {
    /// Cards moved from deck to hand.
    pub drawn: usize,
    /// The deck ran out before the hand reached its target size.
    pub deck_exhausted: bool,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    deck: Deck,
    hand: Vec<Card>,
    caravans: [Caravan; CARAVANS_PER_PLAYER],
}

impl Player {
    /// Create a player with an empty hand and empty caravans.
    #[must_use]
    pub fn new(id: PlayerId, deck: Deck) -> Self {
        Self {
            id,
            deck,
            hand: Vec::new(),
            caravans: Default::default(),
        }
    }

    /// Create a player holding a specific hand.
    #[must_use]
    pub fn with_hand(id: PlayerId, deck: Deck, hand: Vec<Card>) -> Self {
        Self {
            hand,
            ..Self::new(id, deck)
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn caravans(&self) -> &[Caravan; CARAVANS_PER_PLAYER] {
        &self.caravans
    }

    /// Get a caravan by index, or `None` if out of range.
    #[must_use]
    pub fn caravan(&self, index: usize) -> Option<&Caravan> {
        self.caravans.get(index)
    }

    /// Value of each caravan, in order.
    #[must_use]
    pub fn caravan_scores(&self) -> [u32; CARAVANS_PER_PLAYER] {
        let mut scores = [0; CARAVANS_PER_PLAYER];
        for (score, caravan) in scores.iter_mut().zip(&self.caravans) {
            *score = caravan.value();
        }
        scores
    }

    /// Comma-separated hand, e.g. `"7 of Hearts, Jack of Spades"`.
    #[must_use]
    pub fn hand_summary(&self) -> String {
        self.hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    // === Deck and hand ===

    /// Draw one card into the hand.
    ///
    /// Returns `None` without error when the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        let card = self.deck.draw()?;
        self.hand.push(card);
        Some(card)
    }

    /// Draw until the hand holds `hand_size` cards or the deck runs out.
    pub fn refill_hand(&mut self, hand_size: usize) -> Refill {
        let mut refill = Refill::default();
        while self.hand.len() < hand_size {
            if self.draw_card().is_none() {
                refill.deck_exhausted = true;
                break;
            }
            refill.drawn += 1;
        }
        refill
    }

    /// Count every card this player holds anywhere: deck, hand and caravans.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<Card, usize> {
        let mut census = FxHashMap::default();
        let all = self
            .deck
            .cards()
            .iter()
            .chain(&self.hand)
            .chain(self.caravans.iter().flat_map(|c| c.cards()));
        for card in all {
            *census.entry(*card).or_insert(0) += 1;
        }
        census
    }

    // === Crate-private mutation ===

    pub(crate) fn caravan_mut(&mut self, index: usize) -> &mut Caravan {
        &mut self.caravans[index]
    }

    pub(crate) fn take_from_hand(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
