//! The game session state machine.
//!
//! A [`Session`] is a [`Scoreboard`] (plain, cloneable data) plus the
//! [`ChallengeSource`] it rolls from. All mutation goes through
//! [`Session::choose`], [`Session::acknowledge`] and [`Session::restart`],
//! each guarded by [`TransitionContract`].

use super::action::{Action, SessionError};
use super::category::Category;
use super::challenge::{Challenge, ChallengeSource, RandomChallenges};
use super::contracts::{Contract, TransitionContract};
use super::types::{Objective, Phase, ROUND_TOTAL, RoundOutcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One resolved round, as played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct RoundRecord {
    /// Round number (1-based).
    round: u32,
    /// What the round asked.
    challenge: Challenge,
    /// What the player picked.
    selected: Category,
    /// How it was judged.
    outcome: RoundOutcome,
}

// ─────────────────────────────────────────────────────────────
//  Scoreboard
// ─────────────────────────────────────────────────────────────

/// Observable state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub(crate) round_index: u32,
    pub(crate) score: u32,
    pub(crate) challenge: Challenge,
    pub(crate) outcome: Option<RoundOutcome>,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<RoundRecord>,
}

impl Scoreboard {
    /// Fresh scoreboard at round 1 with the given challenge.
    pub fn new(challenge: Challenge) -> Self {
        Self {
            round_index: 1,
            score: 0,
            challenge,
            outcome: None,
            phase: Phase::InRound,
            history: Vec::new(),
        }
    }

    /// 1-based round counter. Already advanced once a choice is resolved.
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    /// Rounds in a game.
    pub fn round_total(&self) -> u32 {
        ROUND_TOTAL
    }

    /// Number of choices resolved so far.
    pub fn rounds_played(&self) -> u32 {
        self.round_index.saturating_sub(1)
    }

    /// Correct choices so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current challenge.
    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    /// The rival's category this round.
    pub fn opposing(&self) -> Category {
        self.challenge.opposing
    }

    /// This round's objective.
    pub fn objective(&self) -> Objective {
        self.challenge.objective
    }

    /// Outcome of the last resolved choice, if it has not been cleared.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the final round has been acknowledged.
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Resolved rounds in play order.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Judges a pick and records it (unchecked - use [`Session::choose`]).
    pub(crate) fn resolve(&mut self, selected: Category) -> RoundOutcome {
        let round = self.round_index;
        self.round_index += 1;

        let outcome = self.challenge.judge(selected);
        if outcome.is_correct() {
            self.score += 1;
        }

        self.outcome = Some(outcome);
        self.history
            .push(RoundRecord::new(round, self.challenge, selected, outcome));
        self.phase = Phase::RoundResolved;
        outcome
    }

    /// Moves on to the next round with a fresh challenge.
    pub(crate) fn begin_round(&mut self, challenge: Challenge) {
        self.challenge = challenge;
        self.outcome = None;
        self.phase = Phase::InRound;
    }

    /// Enters the terminal phase. The last outcome stays visible.
    pub(crate) fn finish(&mut self) {
        self.phase = Phase::GameOver;
    }
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// A single game, from round 1 through game over and any restarts.
#[derive(Debug, Clone)]
pub struct Session<S = RandomChallenges> {
    board: Scoreboard,
    source: S,
}

impl Session<RandomChallenges> {
    /// Creates a session rolling from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_source(RandomChallenges::from_entropy())
    }

    /// Creates a session with reproducible rolls.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomChallenges::seeded(seed))
    }
}

impl Default for Session<RandomChallenges> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ChallengeSource> Session<S> {
    /// Creates a session drawing challenges from `source`.
    ///
    /// Rolls the first challenge immediately.
    pub fn with_source(mut source: S) -> Self {
        let challenge = source.next_challenge();
        info!(%challenge, "Starting session");
        Self {
            board: Scoreboard::new(challenge),
            source,
        }
    }

    /// Returns the observable state.
    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Returns the challenge source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// 1-based round counter.
    pub fn round_index(&self) -> u32 {
        self.board.round_index()
    }

    /// Rounds in a game.
    pub fn round_total(&self) -> u32 {
        self.board.round_total()
    }

    /// Correct choices so far.
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// The rival's category this round.
    pub fn opposing(&self) -> Category {
        self.board.opposing()
    }

    /// This round's objective.
    pub fn objective(&self) -> Objective {
        self.board.objective()
    }

    /// Current challenge.
    pub fn challenge(&self) -> Challenge {
        self.board.challenge()
    }

    /// Outcome of the last resolved choice.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.board.outcome()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    /// Returns true once the final round has been acknowledged.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Resolved rounds in play order.
    pub fn history(&self) -> &[RoundRecord] {
        self.board.history()
    }

    /// Resolves the player's pick against the current challenge.
    ///
    /// Legal only in [`Phase::InRound`]. The challenge is not re-rolled, so
    /// the feedback refers to what was asked.
    #[instrument(skip(self))]
    pub fn choose(&mut self, selected: Category) -> Result<RoundOutcome, SessionError> {
        self.transition(Action::Choose(selected), |board, _| {
            let outcome = board.resolve(selected);
            debug!(%outcome, score = board.score, round = board.round_index, "Round resolved");
            outcome
        })
    }

    /// Dismisses the round feedback.
    ///
    /// Legal only in [`Phase::RoundResolved`]. Ends the game once the round
    /// counter has passed the total, otherwise rolls the next challenge.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> Result<Phase, SessionError> {
        self.transition(Action::Acknowledge, |board, source| {
            if board.round_index > ROUND_TOTAL {
                board.finish();
                info!(score = board.score, "Game over");
            } else {
                board.begin_round(source.next_challenge());
            }
            board.phase
        })
    }

    /// Starts a new game. Legal only in [`Phase::GameOver`].
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.transition(Action::Restart, |board, source| {
            *board = Scoreboard::new(source.next_challenge());
            info!(challenge = %board.challenge, "Restarted");
        })
    }

    /// Applies an action, returning the phase it leads to.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<Phase, SessionError> {
        match action {
            Action::Choose(category) => self.choose(category).map(|_| self.phase()),
            Action::Acknowledge => self.acknowledge(),
            Action::Restart => self.restart().map(|()| self.phase()),
        }
    }

    /// Checks preconditions, mutates, then checks postconditions in debug
    /// builds.
    fn transition<T>(
        &mut self,
        action: Action,
        apply: impl FnOnce(&mut Scoreboard, &mut S) -> T,
    ) -> Result<T, SessionError> {
        TransitionContract::pre(&self.board, &action)?;

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let value = apply(&mut self.board, &mut self.source);

        #[cfg(debug_assertions)]
        TransitionContract::post(&before, &self.board)?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ScriptedChallenges;

    fn session_facing(opposing: Category, objective: Objective) -> Session<ScriptedChallenges> {
        Session::with_source(ScriptedChallenges::repeat(Challenge::new(opposing, objective)))
    }

    #[test]
    fn test_new_session_starts_in_round_one() {
        let session = Session::seeded(1);
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::InRound);
        assert_eq!(session.outcome(), None);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_resolve_records_history() {
        let mut session = session_facing(Category::Water, Objective::Lose);
        session.choose(Category::Fire).unwrap();

        let record = session.history()[0];
        assert_eq!(*record.round(), 1);
        assert_eq!(*record.selected(), Category::Fire);
        assert_eq!(*record.outcome(), RoundOutcome::Correct);
        assert_eq!(record.challenge().opposing(), Category::Water);
    }

    #[test]
    fn test_choose_does_not_roll() {
        let mut session = session_facing(Category::Grass, Objective::Win);
        session.choose(Category::Water).unwrap();
        assert_eq!(session.source().drawn(), 1);
        assert_eq!(session.opposing(), Category::Grass);
        assert_eq!(session.objective(), Objective::Win);
    }

    #[test]
    fn test_acknowledge_clears_outcome() {
        let mut session = session_facing(Category::Grass, Objective::Win);
        session.choose(Category::Fire).unwrap();
        assert_eq!(session.outcome(), Some(RoundOutcome::Correct));

        session.acknowledge().unwrap();
        assert_eq!(session.outcome(), None);
        assert_eq!(session.source().drawn(), 2);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut session = session_facing(Category::Fire, Objective::Win);
        assert_eq!(
            session.apply(Action::Choose(Category::Water)),
            Ok(Phase::RoundResolved)
        );
        assert_eq!(session.apply(Action::Acknowledge), Ok(Phase::InRound));
        assert!(matches!(
            session.apply(Action::Restart),
            Err(SessionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut session = session_facing(Category::Fire, Objective::Win);
        let before = session.board().clone();

        assert!(session.acknowledge().is_err());
        assert!(session.restart().is_err());
        assert_eq!(session.board(), &before);
        assert_eq!(session.source().drawn(), 1);
    }
}
