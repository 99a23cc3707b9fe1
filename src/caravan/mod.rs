//! Caravans and their direction state machine.

mod stack;
mod direction;

pub use stack::Caravan;
pub use direction::Direction;
