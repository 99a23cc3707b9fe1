//! Game state and turn orchestration.
//!
//! `GameState` owns both players and sequences their moves. A move is
//! validated completely before anything is mutated, so a rejected move leaves
//! the state equal to what it was and the same player simply tries again.
//!
//! ## Move pipeline
//!
//! 1. Game not over, player is current
//! 2. Card and caravan indices in range
//! 3. Opponent caravans allowed, if targeted
//! 4. `RulesEngine::can_play` on the target caravan
//! 5. Hand → caravan, Face effect, refill, pass turn, record, check winner

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord, MoveResult};
use super::player::Player;
use crate::cards::{Card, Deck};
use crate::core::{
    CaravanError, GameConfig, GameRng, IndexKind, PlayerId, PlayerRef, Result,
    CARAVANS_PER_PLAYER, PLAYER_COUNT,
};
use crate::rules::RulesEngine;

/// Complete state of a two-player Caravan game.
///
/// Cloning is cheap enough for look-ahead: the move history is an
/// `im::Vector` shared between clones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    rules: RulesEngine,
    players: [Player; PLAYER_COUNT],
    current: PlayerId,
    /// Turn number (starts at 1, advances after every legal move).
    turn: u32,
    winner: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Deal a new game.
    ///
    /// Each player gets a deck shuffled from its own fork of the configured
    /// seed and draws up to `hand_size`. Player 0 moves first.
    ///
    /// ```
    /// use caravan_engine::core::{GameConfig, PlayerId};
    /// use caravan_engine::game::GameState;
    ///
    /// let game = GameState::new(GameConfig::new().with_seed(42)).unwrap();
    ///
    /// assert_eq!(game.current_player(), PlayerId::new(0));
    /// assert_eq!(game.player(PlayerId::new(0)).hand().len(), 5);
    /// assert_eq!(game.player(PlayerId::new(1)).deck().len(), 47);
    /// assert_eq!(game.check_winner(), None);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let players = [PlayerId::new(0), PlayerId::new(1)].map(|id| {
            let mut player = Player::new(id, Deck::new(config.deck_mode, &mut rng.fork()));
            player.refill_hand(config.hand_size);
            player
        });

        Ok(Self::assemble(config, players))
    }

    /// Start a game from prepared players, exactly as given.
    ///
    /// Nothing is dealt. Useful for scripted positions.
    pub fn from_players(config: GameConfig, players: [Player; PLAYER_COUNT]) -> Result<Self> {
        config.validate()?;

        for (seat, player) in players.iter().enumerate() {
            if player.id().index() != seat {
                return Err(CaravanError::InvalidConfig(format!(
                    "{} placed in seat {}",
                    player.id(),
                    seat
                )));
            }
        }

        Ok(Self::assemble(config, players))
    }

    fn assemble(config: GameConfig, players: [Player; PLAYER_COUNT]) -> Self {
        Self {
            rules: RulesEngine::new(&config),
            config,
            players,
            current: PlayerId::new(0),
            turn: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// The player whose move it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The latched winner, once a move has decided the game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every card in the game, counted by value.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<Card, usize> {
        let mut census = FxHashMap::default();
        for player in &self.players {
            for (card, count) in player.card_census() {
                *census.entry(card).or_insert(0) += count;
            }
        }
        census
    }

    // === Win detection ===

    /// First player (in seat order) with enough winning caravans.
    ///
    /// Read-only: computes from the caravans every time.
    #[must_use]
    pub fn check_winner(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&id| self.rules.has_won(self.player(id).caravans()))
    }

    // === Moves ===

    /// Every move `player` could make right now that would be accepted.
    ///
    /// Empty when the game is over or it is not `player`'s turn.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if self.is_over() || player != self.current {
            return Vec::new();
        }

        let targets: &[PlayerRef] = if self.config.allow_opponent_caravans {
            &PlayerRef::ALL
        } else {
            &[PlayerRef::Own]
        };

        let mut moves = Vec::new();
        for (card_index, &card) in self.player(player).hand().iter().enumerate() {
            for &target in targets {
                let board = self.player(player.resolve(target));
                for (caravan_index, caravan) in board.caravans().iter().enumerate() {
                    if self.rules.evaluate(card, caravan).is_legal() {
                        moves.push(Move::new(card_index, caravan_index, target));
                    }
                }
            }
        }
        moves
    }

    /// Submit a `Move` for `player`.
    pub fn submit(&mut self, player: PlayerId, mv: Move) -> Result<MoveResult> {
        self.submit_move(player, mv.card_index, mv.caravan_index, mv.target)
    }

    /// Play card `card_index` from `player`'s hand onto caravan
    /// `caravan_index` of the board named by `target`.
    ///
    /// Any error leaves the game exactly as it was.
    pub fn submit_move(
        &mut self,
        player: PlayerId,
        card_index: usize,
        caravan_index: usize,
        target: PlayerRef,
    ) -> Result<MoveResult> {
        if let Some(winner) = self.winner {
            return Err(CaravanError::GameOver { winner });
        }
        if player != self.current {
            return Err(CaravanError::NotYourTurn { player });
        }

        let hand_len = self.player(player).hand().len();
        if card_index >= hand_len {
            return Err(CaravanError::IndexOutOfRange {
                what: IndexKind::Card,
                index: card_index,
                len: hand_len,
            });
        }
        if caravan_index >= CARAVANS_PER_PLAYER {
            return Err(CaravanError::IndexOutOfRange {
                what: IndexKind::Caravan,
                index: caravan_index,
                len: CARAVANS_PER_PLAYER,
            });
        }
        if target == PlayerRef::Opponent && !self.config.allow_opponent_caravans {
            return Err(CaravanError::OpponentCaravanLocked);
        }

        let rules = self.rules;
        let card = self.player(player).hand()[card_index];
        let target_id = player.resolve(target);

        let caravan = self.players[target_id.index()].caravan_mut(caravan_index);
        if !rules.can_play(card, caravan) {
            return Err(CaravanError::IllegalMove { card, caravan: caravan_index });
        }
        caravan.push(card);
        let effect = rules.apply_special_effect(card, caravan);
        let direction = caravan.direction();
        let caravan_value = caravan.value();

        let acting = &mut self.players[player.index()];
        acting.take_from_hand(card_index);
        let refill = acting.refill_hand(self.config.hand_size);

        let played_on = self.turn;
        self.current = player.opponent();
        self.turn += 1;
        self.winner = self.check_winner();

        let result = MoveResult {
            player,
            card,
            target: target_id,
            caravan_index,
            effect,
            direction,
            caravan_value,
            refill,
            next_player: self.current,
            winner: self.winner,
        };
        self.history.push_back(MoveRecord::from_result(played_on, &result));

        Ok(result)
    }
}
