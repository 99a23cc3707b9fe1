//! Players, moves and turn orchestration.
//!
//! - `Player`: deck, hand and three caravans
//! - `Move` / `MoveResult` / `MoveRecord`: what goes in, what comes out
//! - `GameState`: two players, whose turn it is, win detection

pub mod player;
pub mod action;
pub mod state;

pub use player::{Player, Refill};
pub use action::{Move, MoveRecord, MoveResult};
pub use state::GameState;
