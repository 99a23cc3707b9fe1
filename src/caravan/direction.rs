//! Caravan direction.

use serde::{Deserialize, Serialize};

/// Ordering constraint on a caravan's Numeral cards.
///
/// ```text
/// Unset ──(differing Numeral placed)──> Ascending | Descending
/// Ascending <──(Queen)──> Descending
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Fewer than two distinct Numeral ranks placed so far.
    #[default]
    Unset,
    /// Each new off-suit Numeral must be higher than the last.
    Ascending,
    /// Each new off-suit Numeral must be lower than the last.
    Descending,
}

impl Direction {
    /// Direction established by placing `next` after `previous`.
    ///
    /// Equal ranks establish nothing.
    #[must_use]
    pub fn between(previous: u8, next: u8) -> Self {
        match next.cmp(&previous) {
            std::cmp::Ordering::Greater => Direction::Ascending,
            std::cmp::Ordering::Less => Direction::Descending,
            std::cmp::Ordering::Equal => Direction::Unset,
        }
    }

    /// The opposite direction. `Unset` has no opposite and stays `Unset`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
            Direction::Unset => Direction::Unset,
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self != Direction::Unset
    }

    /// Whether `next` strictly continues this direction from `previous`.
    ///
    /// Always true while unset.
    #[must_use]
    pub fn permits(self, previous: u8, next: u8) -> bool {
        match self {
            Direction::Unset => true,
            Direction::Ascending => next > previous,
            Direction::Descending => next < previous,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Direction::Unset => "Not set",
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        };
        f.write_str(label)
    }
}
