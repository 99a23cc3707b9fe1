//! Player identification.
//!
//! ## PlayerId
//!
//! Caravan is strictly two-player, so `PlayerId` is either seat 0 or seat 1.
//!
//! ## PlayerRef
//!
//! Moves name their target board relative to the acting player. There is no
//! implicit "defaults to self": every call site spells out `Own` or `Opponent`.

use serde::{Deserialize, Serialize};

use super::error::{CaravanError, Result};

/// Number of seats at a Caravan table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier for a two-player game.
///
/// Player indices are 0-based: the first player is `PlayerId::new(0)`.
/// Deserialized IDs go through the same seat check as `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Caravan has exactly 2 players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Resolve a relative reference from this player's point of view.
    ///
    /// ```
    /// use caravan_engine::core::{PlayerId, PlayerRef};
    ///
    /// let p0 = PlayerId::new(0);
    /// assert_eq!(p0.resolve(PlayerRef::Own), p0);
    /// assert_eq!(p0.resolve(PlayerRef::Opponent), PlayerId::new(1));
    /// ```
    #[must_use]
    pub const fn resolve(self, target: PlayerRef) -> Self {
        match target {
            PlayerRef::Own => self,
            PlayerRef::Opponent => self.opponent(),
        }
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = CaravanError;

    fn try_from(id: u8) -> Result<Self> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(CaravanError::InvalidPlayer { id })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Whose caravans a move targets, relative to the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRef {
    /// The acting player's own caravans.
    Own,
    /// The other player's caravans.
    Opponent,
}

impl PlayerRef {
    /// Both targets, own board first.
    pub const ALL: [PlayerRef; 2] = [PlayerRef::Own, PlayerRef::Opponent];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(format!("{}", p1), "Player 2");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    }

    #[test]
    fn test_resolve() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.resolve(PlayerRef::Own), p1);
        assert_eq!(p1.resolve(PlayerRef::Opponent), PlayerId::new(0));
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    #[should_panic(expected = "Caravan has exactly 2 players")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_try_from_checks_seat() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::new(1)));
        assert_eq!(PlayerId::try_from(2), Err(CaravanError::InvalidPlayer { id: 2 }));
        assert_eq!(u8::from(PlayerId::new(1)), 1);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::new(1)).unwrap();
        assert_eq!(json, "1");
        assert_eq!(serde_json::from_str::<PlayerId>(&json).unwrap(), PlayerId::new(1));

        // Out-of-range seats are refused instead of panicking later
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("255").is_err());
    }

    #[test]
    fn test_player_ref_serialization() {
        let json = serde_json::to_string(&PlayerRef::Opponent).unwrap();
        let back: PlayerRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerRef::Opponent);
    }
}
