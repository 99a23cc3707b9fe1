//! Playing cards.
//!
//! A `Card` is a plain value: rank and suit. Two cards with the same rank and
//! suit are interchangeable, which is what the King effect relies on when it
//! appends a fresh copy.
//!
//! ## Kinds
//!
//! - Ranks 1-10 are Numeral cards. They add their rank to a caravan's value
//!   and obey the caravan's direction.
//! - Ranks 11-13 are Face cards (Jack, Queen, King). They add nothing and
//!   trigger a special effect instead.

use serde::{Deserialize, Serialize};

use crate::core::{CaravanError, Result, MAX_NUMERAL_RANK, MAX_RANK};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// What a card does when placed on a caravan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Counts its rank towards caravan value.
    Numeral(u8),
    /// Removes the nearest preceding Numeral.
    Jack,
    /// Flips the caravan's direction.
    Queen,
    /// Duplicates the nearest preceding Numeral.
    King,
}

impl CardKind {
    /// Classify a rank.
    ///
    /// Fails with `InvalidRank` outside 1..=13.
    pub fn classify(rank: u8) -> Result<Self> {
        match rank {
            1..=MAX_NUMERAL_RANK => Ok(CardKind::Numeral(rank)),
            11 => Ok(CardKind::Jack),
            12 => Ok(CardKind::Queen),
            MAX_RANK => Ok(CardKind::King),
            _ => Err(CaravanError::InvalidRank { rank }),
        }
    }
}

/// An immutable playing card.
///
/// ```
/// use caravan_engine::cards::{Card, CardKind, Suit};
///
/// let seven = Card::new(7, Suit::Hearts).unwrap();
/// assert_eq!(seven.kind(), CardKind::Numeral(7));
/// assert_eq!(seven.to_string(), "7 of Hearts");
///
/// let king = Card::new(13, Suit::Spades).unwrap();
/// assert!(king.is_face());
/// assert_eq!(king.value(), 0);
///
/// assert!(Card::new(14, Suit::Clubs).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Create a card, validating the rank.
    pub fn new(rank: u8, suit: Suit) -> Result<Self> {
        CardKind::classify(rank)?;
        Ok(Self { rank, suit })
    }

    /// Rank 1..=13.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Numeral or which Face card.
    #[must_use]
    pub fn kind(self) -> CardKind {
        match self.rank {
            11 => CardKind::Jack,
            12 => CardKind::Queen,
            13 => CardKind::King,
            rank => CardKind::Numeral(rank),
        }
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank > MAX_NUMERAL_RANK
    }

    /// Contribution to caravan value: the rank for Numerals, 0 for Face cards.
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.is_face() {
            0
        } else {
            self.rank as u32
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            CardKind::Numeral(rank) => write!(f, "{} of {}", rank, self.suit),
            CardKind::Jack => write!(f, "Jack of {}", self.suit),
            CardKind::Queen => write!(f, "Queen of {}", self.suit),
            CardKind::King => write!(f, "King of {}", self.suit),
        }
    }
}

/// Unvalidated wire form, so deserialized cards go through `Card::new`.
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = CaravanError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.rank, raw.suit)
    }
}
