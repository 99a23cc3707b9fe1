//! Game configuration.
//!
//! Everything that varies between Caravan table variants is fixed at
//! construction time through `GameConfig`:
//! - `DeckMode`: which cards each player's deck holds
//! - Hand size, win range and how many caravans must be in range
//! - Whether players may place cards on the opponent's caravans
//! - The seed for all shuffling

use serde::{Deserialize, Serialize};

use super::error::{CaravanError, Result};

/// Highest rank in a deck that includes face cards.
pub const MAX_RANK: u8 = 13;

/// Highest Numeral rank.
pub const MAX_NUMERAL_RANK: u8 = 10;

/// Number of caravans each player builds.
pub const CARAVANS_PER_PLAYER: usize = 3;

/// Deck composition for each player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckMode {
    /// One standard set: ranks 1-13, four suits, 52 cards.
    #[default]
    Full,
    /// Three standard sets so hands keep refilling through a long game.
    ///
    /// Without face cards only ranks 1-10 are included.
    House {
        /// Include Jacks, Queens and Kings.
        include_faces: bool,
    },
}

impl DeckMode {
    /// Highest rank generated for this mode.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self {
            DeckMode::Full | DeckMode::House { include_faces: true } => MAX_RANK,
            DeckMode::House { include_faces: false } => MAX_NUMERAL_RANK,
        }
    }

    /// How many copies of each (rank, suit) pair the deck holds.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            DeckMode::Full => 1,
            DeckMode::House { .. } => 3,
        }
    }

    /// Total number of cards a freshly built deck holds.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.max_rank() as usize * 4 * self.copies()
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use caravan_engine::core::{DeckMode, GameConfig};
///
/// let config = GameConfig::new()
///     .with_deck_mode(DeckMode::House { include_faces: true })
///     .with_seed(7)
///     .with_opponent_caravans(false);
///
/// assert_eq!(config.hand_size, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Deck composition for both players.
    pub deck_mode: DeckMode,

    /// Cards a hand is refilled to after every legal move.
    pub hand_size: usize,

    /// Lowest winning caravan value (inclusive).
    pub win_min: u32,

    /// Highest winning caravan value (inclusive).
    pub win_max: u32,

    /// Caravans that must be winning at the same time.
    pub caravans_to_win: usize,

    /// May a player place cards on the opponent's caravans?
    pub allow_opponent_caravans: bool,

    /// Seed for deck shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_mode: DeckMode::Full,
            hand_size: 5,
            win_min: 21,
            win_max: 26,
            caravans_to_win: 2,
            allow_opponent_caravans: true,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck_mode(mut self, mode: DeckMode) -> Self {
        self.deck_mode = mode;
        self
    }

    /// Set the hand refill size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the inclusive winning value range.
    #[must_use]
    pub fn with_win_range(mut self, min: u32, max: u32) -> Self {
        self.win_min = min;
        self.win_max = max;
        self
    }

    /// Set how many caravans must be winning at once.
    #[must_use]
    pub fn with_caravans_to_win(mut self, count: usize) -> Self {
        self.caravans_to_win = count;
        self
    }

    /// Allow or forbid placing cards on the opponent's caravans.
    #[must_use]
    pub fn with_opponent_caravans(mut self, allowed: bool) -> Self {
        self.allow_opponent_caravans = allowed;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(CaravanError::InvalidConfig("hand size must be at least 1".to_string()));
        }
        if self.win_min > self.win_max {
            return Err(CaravanError::InvalidConfig(format!(
                "win range {}..={} is empty",
                self.win_min, self.win_max
            )));
        }
        if self.caravans_to_win == 0 || self.caravans_to_win > CARAVANS_PER_PLAYER {
            return Err(CaravanError::InvalidConfig(format!(
                "caravans to win must be 1..={}, got {}",
                CARAVANS_PER_PLAYER, self.caravans_to_win
            )));
        }
        Ok(())
    }
}
