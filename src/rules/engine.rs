//! The Caravan rules engine.
//!
//! `RulesEngine` decides whether a card may be placed on a caravan, resolves
//! Face card effects, and scores caravans. It holds only the scoring
//! parameters from `GameConfig`; all game state lives in the caravans passed
//! to it.
//!
//! ## Placement rules
//!
//! New Numerals are compared against the caravan's last card, whatever its
//! kind. A Face card compares by its rank (Jack 11, Queen 12, King 13).
//!
//! | Caravan                   | Candidate               | Verdict                         |
//! |---------------------------|-------------------------|---------------------------------|
//! | empty                     | anything                | legal                           |
//! | non-empty                 | Face card               | legal                           |
//! | no Numerals, unset        | Numeral                 | legal, stays unset              |
//! | direction unset           | Numeral                 | legal, sets direction           |
//! | direction set             | Numeral, last card suit | legal (suit bypass)             |
//! | direction set             | Numeral, other suit     | legal iff it continues strictly |

use serde::{Deserialize, Serialize};

use super::effect::EffectResult;
use crate::caravan::{Caravan, Direction};
use crate::cards::{Card, CardKind};
use crate::core::GameConfig;

/// Verdict of a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The card may be placed; the caravan then has `direction`.
    Legal { direction: Direction },
    /// The card would break the caravan's direction.
    Illegal,
}

impl Placement {
    #[must_use]
    pub fn is_legal(self) -> bool {
        matches!(self, Placement::Legal { .. })
    }
}

/// Placement legality, special effects and scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesEngine {
    win_min: u32,
    win_max: u32,
    caravans_to_win: usize,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl RulesEngine {
    /// Take the scoring parameters from a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            win_min: config.win_min,
            win_max: config.win_max,
            caravans_to_win: config.caravans_to_win,
        }
    }

    // === Legality ===

    /// Decide whether `card` may be placed on `caravan`, without touching it.
    #[must_use]
    pub fn evaluate(&self, card: Card, caravan: &Caravan) -> Placement {
        let current = caravan.direction();

        let Some(last) = caravan.last() else {
            return Placement::Legal { direction: current };
        };
        if card.is_face() {
            return Placement::Legal { direction: current };
        }

        if !current.is_set() {
            // Direction needs a Numeral already on the caravan
            if caravan.numeral_count() == 0 {
                return Placement::Legal { direction: current };
            }
            return Placement::Legal {
                direction: Direction::between(last.rank(), card.rank()),
            };
        }

        if card.suit() == last.suit() || current.permits(last.rank(), card.rank()) {
            Placement::Legal { direction: current }
        } else {
            Placement::Illegal
        }
    }

    /// Legality check that commits the direction a legal placement establishes.
    ///
    /// On `false` the caravan is untouched. On `true` the caller must go on to
    /// append `card`.
    pub fn can_play(&self, card: Card, caravan: &mut Caravan) -> bool {
        match self.evaluate(card, caravan) {
            Placement::Legal { direction } => {
                caravan.set_direction(direction);
                true
            }
            Placement::Illegal => false,
        }
    }

    /// Check, append and resolve in one step.
    ///
    /// Returns `None`, leaving the caravan untouched, if the card is illegal.
    pub fn place(&self, card: Card, caravan: &mut Caravan) -> Option<EffectResult> {
        if !self.can_play(card, caravan) {
            return None;
        }
        caravan.push(card);
        Some(self.apply_special_effect(card, caravan))
    }

    // === Special effects ===

    /// Resolve the effect of `card`, which has just been appended to `caravan`.
    ///
    /// If `card` is not the caravan's last card nothing happens and
    /// `EffectResult::None` is returned.
    pub fn apply_special_effect(&self, card: Card, caravan: &mut Caravan) -> EffectResult {
        if caravan.last() != Some(card) {
            return EffectResult::None;
        }
        let placed_at = caravan.len().saturating_sub(1);

        match card.kind() {
            CardKind::Numeral(_) => EffectResult::None,

            CardKind::Jack => match caravan.nearest_numeral_before(placed_at) {
                Some(index) => EffectResult::Removed(caravan.remove(index)),
                None => EffectResult::NothingToRemove,
            },

            CardKind::Queen => {
                let from = caravan.direction();
                if !from.is_set() {
                    return EffectResult::DirectionUnset;
                }
                let to = from.flipped();
                caravan.set_direction(to);
                EffectResult::DirectionFlipped { from, to }
            }

            CardKind::King => match caravan.nearest_numeral_at_or_before(placed_at) {
                Some(index) => {
                    // Cards are values, so this is a new card, not a reference.
                    let copy = caravan.cards()[index];
                    caravan.push(copy);
                    EffectResult::Duplicated(copy)
                }
                None => EffectResult::NothingToDuplicate,
            },
        }
    }

    // === Scoring ===

    /// Sum of Numeral ranks on the caravan.
    #[must_use]
    pub fn caravan_value(&self, caravan: &Caravan) -> u32 {
        caravan.value()
    }

    /// Whether the caravan's value lies in the winning range.
    #[must_use]
    pub fn is_winning(&self, caravan: &Caravan) -> bool {
        (self.win_min..=self.win_max).contains(&caravan.value())
    }

    /// How many of the given caravans are winning.
    #[must_use]
    pub fn winning_caravans(&self, caravans: &[Caravan]) -> usize {
        caravans.iter().filter(|c| self.is_winning(c)).count()
    }

    /// Whether enough caravans are winning at once.
    #[must_use]
    pub fn has_won(&self, caravans: &[Caravan]) -> bool {
        self.winning_caravans(caravans) >= self.caravans_to_win
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit).unwrap()
    }

    fn build(rules: &RulesEngine, cards: &[Card]) -> Caravan {
        let mut caravan = Caravan::new();
        for c in cards {
            assert!(rules.place(*c, &mut caravan).is_some(), "setup card {} rejected", c);
        }
        caravan
    }

    #[test]
    fn test_empty_caravan_accepts_anything() {
        let rules = RulesEngine::default();
        for rank in 1..=13 {
            let caravan = Caravan::new();
            assert!(rules.evaluate(card(rank, Suit::Spades), &caravan).is_legal());
        }
    }

    #[test]
    fn test_second_numeral_sets_direction() {
        let rules = RulesEngine::default();

        let mut up = build(&rules, &[card(3, Suit::Hearts)]);
        assert!(rules.can_play(card(7, Suit::Diamonds), &mut up));
        assert_eq!(up.direction(), Direction::Ascending);

        let mut down = build(&rules, &[card(7, Suit::Hearts)]);
        assert!(rules.can_play(card(3, Suit::Diamonds), &mut down));
        assert_eq!(down.direction(), Direction::Descending);
    }

    #[test]
    fn test_equal_rank_leaves_direction_unset() {
        let rules = RulesEngine::default();
        let caravan = build(&rules, &[card(5, Suit::Hearts), card(5, Suit::Clubs)]);

        assert_eq!(caravan.direction(), Direction::Unset);

        // A later differing rank still establishes it
        let mut caravan = caravan;
        assert!(rules.can_play(card(2, Suit::Spades), &mut caravan));
        assert_eq!(caravan.direction(), Direction::Descending);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let rules = RulesEngine::default();
        let caravan = build(&rules, &[card(3, Suit::Hearts)]);
        let before = caravan.clone();

        assert_eq!(
            rules.evaluate(card(9, Suit::Clubs), &caravan),
            Placement::Legal { direction: Direction::Ascending }
        );
        assert_eq!(caravan, before);
    }

    #[test]
    fn test_direction_enforced_off_suit() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(3, Suit::Hearts), card(7, Suit::Diamonds)]);

        assert!(!rules.can_play(card(4, Suit::Clubs), &mut caravan));
        assert!(!rules.can_play(card(7, Suit::Clubs), &mut caravan));
        assert!(rules.can_play(card(9, Suit::Clubs), &mut caravan));
    }

    #[test]
    fn test_suit_bypass() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(3, Suit::Hearts), card(7, Suit::Diamonds)]);

        // Lower, but same suit as the last Numeral
        assert!(rules.can_play(card(2, Suit::Diamonds), &mut caravan));
        assert_eq!(caravan.direction(), Direction::Ascending);
    }

    #[test]
    fn test_failed_check_leaves_caravan_untouched() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(8, Suit::Hearts), card(4, Suit::Spades)]);
        let before = caravan.clone();

        assert!(!rules.can_play(card(6, Suit::Clubs), &mut caravan));
        assert!(rules.place(card(6, Suit::Clubs), &mut caravan).is_none());
        assert_eq!(caravan, before);
    }

    #[test]
    fn test_face_cards_ignore_direction() {
        let rules = RulesEngine::default();
        let caravan = build(&rules, &[card(3, Suit::Hearts), card(7, Suit::Diamonds)]);

        for rank in 11..=13 {
            assert!(rules.evaluate(card(rank, Suit::Clubs), &caravan).is_legal());
        }
    }

    #[test]
    fn test_king_copy_is_compared() {
        let rules = RulesEngine::default();
        // 3, 7 ascending, then a King appends a second 7
        let mut caravan = build(&rules, &[
            card(3, Suit::Hearts),
            card(7, Suit::Diamonds),
            card(13, Suit::Spades),
        ]);

        assert_eq!(caravan.last(), Some(card(7, Suit::Diamonds)));
        assert!(!rules.can_play(card(7, Suit::Clubs), &mut caravan));
        assert!(rules.can_play(card(8, Suit::Clubs), &mut caravan));
    }

    #[test]
    fn test_suit_bypass_through_queen() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[
            card(3, Suit::Hearts),
            card(7, Suit::Diamonds),
            card(12, Suit::Clubs),
        ]);
        assert_eq!(caravan.direction(), Direction::Descending);

        // Shares the Queen's suit, so direction does not matter
        assert_eq!(
            rules.evaluate(card(9, Suit::Clubs), &caravan),
            Placement::Legal { direction: Direction::Descending }
        );
        // Off-suit and below 12: continues downwards
        assert!(rules.evaluate(card(10, Suit::Hearts), &caravan).is_legal());
        assert!(rules.place(card(9, Suit::Clubs), &mut caravan).is_some());
    }

    #[test]
    fn test_jack_as_last_card_compares_at_eleven() {
        let rules = RulesEngine::default();
        // The Jack removes the 7, leaving [3, J] still ascending
        let mut caravan = build(&rules, &[
            card(3, Suit::Hearts),
            card(7, Suit::Diamonds),
            card(11, Suit::Spades),
        ]);
        assert_eq!(caravan.cards(), &[card(3, Suit::Hearts), card(11, Suit::Spades)]);
        assert_eq!(caravan.direction(), Direction::Ascending);

        // 9 is below 11 and off-suit
        assert_eq!(rules.evaluate(card(9, Suit::Clubs), &caravan), Placement::Illegal);
        assert!(!rules.can_play(card(10, Suit::Hearts), &mut caravan));
        // Same suit as the Jack
        assert!(rules.can_play(card(9, Suit::Spades), &mut caravan));
    }

    #[test]
    fn test_direction_set_against_face_last_card() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(5, Suit::Hearts), card(12, Suit::Clubs)]);
        assert_eq!(caravan.direction(), Direction::Unset);

        // 8 is above the 5 but below the Queen's 12
        assert!(rules.place(card(8, Suit::Diamonds), &mut caravan).is_some());
        assert_eq!(caravan.direction(), Direction::Descending);
    }

    #[test]
    fn test_numeral_after_only_face_cards() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(12, Suit::Hearts)]);

        assert!(rules.can_play(card(4, Suit::Clubs), &mut caravan));
        assert_eq!(caravan.direction(), Direction::Unset);
    }

    #[test]
    fn test_jack_removes_nearest_numeral() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(4, Suit::Hearts)]);

        let effect = rules.place(card(11, Suit::Spades), &mut caravan);

        assert_eq!(effect, Some(EffectResult::Removed(card(4, Suit::Hearts))));
        assert_eq!(caravan.cards(), &[card(11, Suit::Spades)]);
        assert_eq!(caravan.value(), 0);
    }

    #[test]
    fn test_jack_skips_face_cards() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[
            card(2, Suit::Hearts),
            card(6, Suit::Hearts),
            card(12, Suit::Clubs),
        ]);

        let effect = rules.place(card(11, Suit::Spades), &mut caravan);

        assert_eq!(effect, Some(EffectResult::Removed(card(6, Suit::Hearts))));
        assert_eq!(
            caravan.cards(),
            &[card(2, Suit::Hearts), card(12, Suit::Clubs), card(11, Suit::Spades)]
        );
        assert_eq!(caravan.value(), 2);
    }

    #[test]
    fn test_jack_keeps_direction() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(3, Suit::Hearts), card(7, Suit::Diamonds)]);

        rules.place(card(11, Suit::Spades), &mut caravan);

        assert_eq!(caravan.direction(), Direction::Ascending);
        assert_eq!(caravan.value(), 3);
    }

    #[test]
    fn test_jack_with_nothing_to_remove() {
        let rules = RulesEngine::default();
        let mut caravan = Caravan::new();

        let effect = rules.place(card(11, Suit::Hearts), &mut caravan);

        assert_eq!(effect, Some(EffectResult::NothingToRemove));
        assert_eq!(caravan.len(), 1);
    }

    #[test]
    fn test_queen_flips_direction() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(3, Suit::Hearts), card(7, Suit::Diamonds)]);

        let effect = rules.place(card(12, Suit::Clubs), &mut caravan);

        assert_eq!(
            effect,
            Some(EffectResult::DirectionFlipped {
                from: Direction::Ascending,
                to: Direction::Descending,
            })
        );
        assert!(rules.can_play(card(5, Suit::Spades), &mut caravan));
    }

    #[test]
    fn test_queen_on_unset_is_noop() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(5, Suit::Hearts)]);

        let effect = rules.place(card(12, Suit::Clubs), &mut caravan);

        assert_eq!(effect, Some(EffectResult::DirectionUnset));
        assert_eq!(caravan.direction(), Direction::Unset);
    }

    #[test]
    fn test_king_duplicates_nearest_numeral() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(6, Suit::Diamonds)]);

        let effect = rules.place(card(13, Suit::Hearts), &mut caravan);

        assert_eq!(effect, Some(EffectResult::Duplicated(card(6, Suit::Diamonds))));
        assert_eq!(
            caravan.cards(),
            &[card(6, Suit::Diamonds), card(13, Suit::Hearts), card(6, Suit::Diamonds)]
        );
        assert_eq!(caravan.value(), 12);
    }

    #[test]
    fn test_king_with_nothing_to_duplicate() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(12, Suit::Hearts)]);

        let effect = rules.place(card(13, Suit::Hearts), &mut caravan);

        assert_eq!(effect, Some(EffectResult::NothingToDuplicate));
        assert_eq!(caravan.len(), 2);
    }

    #[test]
    fn test_effect_needs_card_on_top() {
        let rules = RulesEngine::default();
        let mut caravan = build(&rules, &[card(4, Suit::Hearts), card(6, Suit::Hearts)]);
        let before = caravan.clone();

        let effect = rules.apply_special_effect(card(11, Suit::Spades), &mut caravan);

        assert_eq!(effect, EffectResult::None);
        assert_eq!(caravan, before);
    }

    #[test]
    fn test_numeral_has_no_effect() {
        let rules = RulesEngine::default();
        let mut caravan = Caravan::new();
        assert_eq!(rules.place(card(9, Suit::Clubs), &mut caravan), Some(EffectResult::None));
    }

    #[test]
    fn test_winning_range() {
        let rules = RulesEngine::default();

        let low = build(&rules, &[card(10, Suit::Hearts), card(10, Suit::Hearts)]);
        let at_min = build(&rules, &[card(10, Suit::Hearts), card(10, Suit::Hearts), card(1, Suit::Hearts)]);
        let at_max = build(&rules, &[
            card(10, Suit::Hearts),
            card(10, Suit::Hearts),
            card(6, Suit::Hearts),
        ]);
        let bust = build(&rules, &[
            card(10, Suit::Hearts),
            card(10, Suit::Hearts),
            card(7, Suit::Hearts),
        ]);

        assert!(!rules.is_winning(&low));
        assert!(rules.is_winning(&at_min));
        assert!(rules.is_winning(&at_max));
        assert!(!rules.is_winning(&bust));
    }

    #[test]
    fn test_has_won_needs_two_caravans() {
        let rules = RulesEngine::default();
        let winning = build(&rules, &[card(10, Suit::Clubs), card(10, Suit::Clubs), card(2, Suit::Clubs)]);

        let one = [winning.clone(), Caravan::new(), Caravan::new()];
        let two = [winning.clone(), winning.clone(), Caravan::new()];

        assert_eq!(rules.winning_caravans(&one), 1);
        assert!(!rules.has_won(&one));
        assert!(rules.has_won(&two));
    }

    #[test]
    fn test_custom_win_range() {
        let config = GameConfig::new().with_win_range(5, 6).with_caravans_to_win(1);
        let rules = RulesEngine::new(&config);
        let caravan = build(&rules, &[card(5, Suit::Hearts)]);

        assert_eq!(rules.caravan_value(&caravan), 5);
        assert!(rules.has_won(&[caravan]));
    }
}
