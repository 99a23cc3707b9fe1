//! Caravans: the ordered card stacks each player builds.
//!
//! A caravan only ever grows at the end, except when a Jack removes one of its
//! Numeral cards. Its value is never stored; it is recomputed from the cards so
//! it cannot drift out of sync after a removal or duplication.
//!
//! Mutation is crate-private. Outside callers place cards through
//! `RulesEngine`, which enforces the placement rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use crate::cards::Card;

/// One of a player's three card stacks.
///
/// `SmallVec` keeps typical caravans (under 8 cards) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caravan {
    cards: SmallVec<[Card; 8]>,
    direction: Direction,
}

impl Caravan {
    /// Create an empty caravan with no direction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in placement order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sum of Numeral ranks. Face cards contribute nothing.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// Number of Numeral cards.
    #[must_use]
    pub fn numeral_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_face()).count()
    }

    /// The most recently placed card of any kind. New Numerals are compared
    /// against it.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Index of the nearest Numeral strictly before `index`, skipping Face cards.
    ///
    /// `index` may equal `len()` to search the whole caravan.
    ///
    /// ```
    /// use caravan_engine::caravan::Caravan;
    /// use caravan_engine::cards::{Card, Suit};
    /// use caravan_engine::rules::RulesEngine;
    ///
    /// let rules = RulesEngine::default();
    /// let mut caravan = Caravan::new();
    /// rules.place(Card::new(4, Suit::Hearts).unwrap(), &mut caravan).unwrap();
    /// rules.place(Card::new(12, Suit::Clubs).unwrap(), &mut caravan).unwrap();
    ///
    /// assert_eq!(caravan.nearest_numeral_before(2), Some(0));
    /// assert_eq!(caravan.nearest_numeral_before(0), None);
    /// ```
    #[must_use]
    pub fn nearest_numeral_before(&self, index: usize) -> Option<usize> {
        let end = index.min(self.cards.len());
        self.cards[..end].iter().rposition(|c| !c.is_face())
    }

    /// Index of the nearest Numeral at or before `index`, skipping Face cards.
    #[must_use]
    pub fn nearest_numeral_at_or_before(&self, index: usize) -> Option<usize> {
        self.nearest_numeral_before(index.saturating_add(1))
    }

    // === Crate-private mutation ===

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
