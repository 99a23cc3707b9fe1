//! Card and deck model.
//!
//! - `Card`: rank + suit value type with a derived `CardKind`
//! - `Deck`: shuffled draw pile owned by a player

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Suit};
pub use deck::Deck;
