//! The match state machine.
//!
//! ```text
//! Playing --round won by non-Wild card--> Playing | Finished
//! Playing --round won by player Wild----> AwaitingWildChoice(Player)
//! Playing --round won by opponent Wild--> Playing | Finished   (policy nominates)
//! AwaitingWildChoice --nominate---------> Playing | Finished
//! any --reset---------------------------> Playing
//! ```
//!
//! The win condition is checked after every tally mutation, for the side
//! whose tally changed.

use thiserror::Error;

use super::policy::{NominationPolicy, UniformNomination};
use crate::cards::{Card, CardDealer, Element, Hand};
use crate::core::{
    Action, GameRng, MatchConfig, MatchPhase, MatchState, RandomSource, RoundRecord, Side, SideMap,
};
use crate::rules::{resolve, MatchOutcome, WinTally};

/// Requests the match cannot honour in its current phase.
///
/// These are caller mistakes. The match state is untouched when one is
/// returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("a Wild nomination is pending for {0}")]
    ChoicePending(Side),

    #[error("the match is over: {0} won")]
    MatchFinished(Side),

    #[error("no Wild nomination is pending")]
    NoPendingChoice,

    #[error("Wild cannot be nominated")]
    WildNomination,

    #[error("hand slot {index} does not exist (hand holds {len})")]
    InvalidHandIndex { index: usize, len: usize },

    #[error("position cannot be played: {0}")]
    InvalidPosition(&'static str),
}

/// What a resolved round did to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The resolved round.
    pub record: RoundRecord,

    /// Tally credit applied this round, if any.
    pub credited: Option<(Side, Element)>,

    /// Phase after the round.
    pub phase: MatchPhase,
}

/// A single match between the human and the scripted opponent.
///
/// Owns the state, the randomness source and the opponent policy. All
/// operations run to completion synchronously.
pub struct Match<R: RandomSource = GameRng> {
    config: MatchConfig,
    dealer: CardDealer,
    state: MatchState,
    rng: R,
    policy: Box<dyn NominationPolicy>,
}

impl Match<GameRng> {
    /// Create a match, seeding from `config.seed` or entropy.
    pub fn new(config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::debug!("New match with seed {}", rng.seed());
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Match<R> {
    /// Create a match drawing from the given randomness source.
    pub fn with_rng(config: MatchConfig, mut rng: R) -> Self {
        let dealer = CardDealer::new(config.wild_probability);
        let hand = Hand::deal(config.hand_size, &dealer, &mut rng);
        Self {
            config,
            dealer,
            state: MatchState::new(hand),
            rng,
            policy: Box::new(UniformNomination),
        }
    }

    /// Replace the opponent nomination policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl NominationPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Start a match from a mid-game position.
    ///
    /// The phase is derived from the tallies: a side already holding a
    /// winning tally has won. Positions where both sides are winning, or
    /// with an empty hand, are rejected.
    pub fn from_position(
        config: MatchConfig,
        rng: R,
        tallies: SideMap<WinTally>,
        hand: Hand,
    ) -> Result<Self, MatchError> {
        if hand.is_empty() {
            return Err(MatchError::InvalidPosition("empty hand"));
        }
        let winning = (tallies[Side::Player].is_winning(), tallies[Side::Opponent].is_winning());
        let phase = match winning {
            (true, true) => {
                return Err(MatchError::InvalidPosition("both sides hold a winning tally"))
            }
            (true, false) => MatchPhase::Finished(Side::Player),
            (false, true) => MatchPhase::Finished(Side::Opponent),
            (false, false) => MatchPhase::Playing,
        };

        let mut game = Self::with_rng(config, rng);
        game.state.tallies = tallies;
        game.state.hand = hand;
        game.state.phase = phase;
        Ok(game)
    }

    /// The configuration this match was created with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Read-only view of the full match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Outcome implied by the current phase.
    pub fn outcome(&self) -> MatchOutcome {
        self.state.outcome()
    }

    /// Element tally for one side.
    pub fn tally(&self, side: Side) -> &WinTally {
        &self.state.tallies[side]
    }

    /// Both tallies, player first.
    pub fn tallies(&self) -> &SideMap<WinTally> {
        &self.state.tallies
    }

    /// The human hand.
    pub fn hand(&self) -> &Hand {
        &self.state.hand
    }

    /// Most recent resolved round, if any since the last reset.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.state.last_round.as_ref()
    }

    /// Dispatch a human action.
    pub fn apply(&mut self, action: Action) -> Result<MatchPhase, MatchError> {
        match action {
            Action::PlayCard(index) => self.play_card(index).map(|report| report.phase),
            Action::Nominate(element) => self.nominate(element),
            Action::Reset => {
                self.reset();
                Ok(self.phase())
            }
        }
    }

    /// Play the card in a hand slot against a freshly drawn opponent card.
    ///
    /// The slot is refilled after the round resolves.
    pub fn play_card(&mut self, index: usize) -> Result<RoundReport, MatchError> {
        self.ensure_playing()?;
        let player_card = self.state.hand.get(index).ok_or(MatchError::InvalidHandIndex {
            index,
            len: self.state.hand.len(),
        })?;

        let opponent_card = self.dealer.deal(&mut self.rng);
        let report = self.play_round(player_card, opponent_card)?;

        let replacement = self.dealer.deal(&mut self.rng);
        self.state.hand.replace(index, replacement);

        Ok(report)
    }

    /// Resolve a round between two given cards and apply it.
    pub fn play_round(
        &mut self,
        player_card: Card,
        opponent_card: Card,
    ) -> Result<RoundReport, MatchError> {
        self.ensure_playing()?;

        let outcome = resolve(&player_card, &opponent_card);
        self.state.rounds_played += 1;
        let record =
            RoundRecord::new(player_card, opponent_card, outcome, self.state.rounds_played);
        self.state.last_round = Some(record);
        log::debug!("Round {}: {}", record.round, record);

        let credited = match outcome.winner() {
            None => None,
            Some(side) => {
                let card = match side {
                    Side::Player => player_card,
                    Side::Opponent => opponent_card,
                };
                if !card.is_wild() {
                    self.credit(side, card.element());
                    Some((side, card.element()))
                } else {
                    match side {
                        Side::Player => {
                            self.state.phase = MatchPhase::AwaitingWildChoice(Side::Player);
                            None
                        }
                        Side::Opponent => {
                            let tally = self.state.tallies[Side::Opponent];
                            let element = self.policy.nominate(&tally, &mut self.rng);
                            log::debug!("Opponent Wild counts toward {}", element);
                            self.credit(Side::Opponent, element);
                            Some((Side::Opponent, element))
                        }
                    }
                }
            }
        };

        Ok(RoundReport {
            record,
            credited,
            phase: self.state.phase,
        })
    }

    /// Assign the pending Wild win to an element.
    pub fn nominate(&mut self, element: Element) -> Result<MatchPhase, MatchError> {
        let side = self.state.phase.pending_choice().ok_or(MatchError::NoPendingChoice)?;
        if element.is_wild() {
            return Err(MatchError::WildNomination);
        }

        self.state.phase = MatchPhase::Playing;
        self.credit(side, element);
        Ok(self.state.phase)
    }

    /// Zero both tallies, clear the last round and deal a fresh hand.
    pub fn reset(&mut self) {
        let hand = Hand::deal(self.config.hand_size, &self.dealer, &mut self.rng);
        self.state = MatchState::new(hand);
        log::info!("Match reset");
    }

    fn ensure_playing(&self) -> Result<(), MatchError> {
        match self.state.phase {
            MatchPhase::Playing => Ok(()),
            MatchPhase::AwaitingWildChoice(side) => Err(MatchError::ChoicePending(side)),
            MatchPhase::Finished(side) => Err(MatchError::MatchFinished(side)),
        }
    }

    /// Increment a tally and check that side's win condition.
    fn credit(&mut self, side: Side, element: Element) {
        let tally = &mut self.state.tallies[side];
        tally.increment(element);
        if tally.is_winning() {
            log::info!("{} wins the match with {}", side, tally);
            self.state.phase = MatchPhase::Finished(side);
        }
    }
}
