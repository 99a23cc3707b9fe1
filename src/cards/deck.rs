//! Player decks.
//!
//! A deck is an ordered pool of cards. The top of the deck is the end of the
//! vector, so `draw` is a `pop`. Decks are shuffled exactly once, when built.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use crate::core::{DeckMode, GameRng};

/// An ordered, drawable pool of cards (top = end of vec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a deck for the given mode.
    #[must_use]
    pub fn new(mode: DeckMode, rng: &mut GameRng) -> Self {
        let set = Self::standard_set(mode.max_rank());
        let mut cards = Vec::with_capacity(mode.deck_size());
        for _ in 0..mode.copies() {
            cards.extend_from_slice(&set);
        }
        Self::from_cards(cards, rng)
    }

    /// Shuffle caller-supplied cards into a deck.
    ///
    /// Duplicates are kept, so several standard sets can be concatenated.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Use cards in exactly the given order. The last card is drawn first.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// One card of every (rank, suit) pair for ranks `1..=max_rank`.
    ///
    /// `max_rank` is clamped to 13.
    #[must_use]
    pub fn standard_set(max_rank: u8) -> Vec<Card> {
        (1..=max_rank.min(crate::core::MAX_RANK))
            .flat_map(|rank| {
                Suit::ALL
                    .into_iter()
                    .filter_map(move |suit| Card::new(rank, suit).ok())
            })
            .collect()
    }

    /// Remove and return the top card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
