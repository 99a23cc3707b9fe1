//! Core engine types: players, configuration, RNG, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerRef, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{DeckMode, GameConfig, CARAVANS_PER_PLAYER, MAX_NUMERAL_RANK, MAX_RANK};
pub use error::{CaravanError, IndexKind, Result};
