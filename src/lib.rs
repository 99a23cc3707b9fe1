//! # caravan-engine
//!
//! Rules engine for Caravan, a two-player card game in which each player
//! builds three caravans and tries to bring two of them to a value between
//! 21 and 26.
//!
//! ## Design Principles
//!
//! 1. **No output side effects**: every operation returns a structured value
//!    (`MoveResult`, `EffectResult`, `CaravanError`). Rendering is the
//!    caller's job.
//!
//! 2. **Rejections are free**: a move is validated completely before
//!    anything changes, so a rejected move leaves `GameState` equal to what it
//!    was.
//!
//! 3. **Deterministic**: a `GameConfig` seed fixes both deck shuffles.
//!
//! ## Example
//!
//! ```
//! use caravan_engine::{GameConfig, GameState, PlayerRef};
//!
//! let mut game = GameState::new(GameConfig::new().with_seed(42)).unwrap();
//! let player = game.current_player();
//!
//! // Any card may start an empty caravan
//! let result = game.submit_move(player, 0, 0, PlayerRef::Own).unwrap();
//! assert_eq!(result.next_player, player.opponent());
//! assert_eq!(game.player(player).hand().len(), 5);
//! ```
//!
//! ## Modules
//!
//! - `core`: player IDs, configuration, RNG, errors
//! - `cards`: cards and decks
//! - `caravan`: caravans and their direction state machine
//! - `rules`: legality, Face card effects, scoring
//! - `game`: players, moves, turn orchestration
//! - `policy`: move sources and the random chooser

pub mod core;
pub mod cards;
pub mod caravan;
pub mod rules;
pub mod game;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    CaravanError, DeckMode, GameConfig, GameRng, IndexKind, PlayerId, PlayerRef, Result,
};

pub use crate::cards::{Card, CardKind, Deck, Suit};

pub use crate::caravan::{Caravan, Direction};

pub use crate::rules::{EffectResult, Placement, RulesEngine};

pub use crate::game::{GameState, Move, MoveRecord, MoveResult, Player, Refill};

pub use crate::policy::{play_out, MovePolicy, PlayOutcome, RandomPolicy};
