//! Challenges and the sources that roll them.
//!
//! A session asks for a new [`Challenge`] at exactly three points: when it
//! is created, when a non-final round is acknowledged, and on restart.
//! Everything else is deterministic, so the [`ChallengeSource`] is the only
//! seam where nondeterminism enters.

use super::category::{Category, beats};
use super::types::{Objective, RoundOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The question a round asks: which category to play against, and whether
/// to beat it or lose to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge {
    /// The rival's category.
    pub opposing: Category,
    /// Whether the pick must win or lose against `opposing`.
    pub objective: Objective,
}

impl Challenge {
    /// Creates a new challenge.
    pub fn new(opposing: Category, objective: Objective) -> Self {
        Self { opposing, objective }
    }

    /// Returns the rival's category.
    pub fn opposing(&self) -> Category {
        self.opposing
    }

    /// Returns the objective.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Judges a pick against this challenge.
    pub fn judge(&self, selected: Category) -> RoundOutcome {
        let correct = match self.objective {
            Objective::Win => beats(selected, self.opposing),
            Objective::Lose => beats(self.opposing, selected),
        };
        RoundOutcome::from(correct)
    }

    /// The one category that satisfies this challenge.
    pub fn answer(&self) -> Category {
        match self.objective {
            Objective::Win => self.opposing.predator(),
            Objective::Lose => self.opposing.prey(),
        }
    }
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} against {}", self.objective, self.opposing)
    }
}

/// Supplies a fresh challenge whenever the session rolls.
pub trait ChallengeSource {
    /// Produces the next challenge.
    fn next_challenge(&mut self) -> Challenge;
}

// ─────────────────────────────────────────────────────────────
//  Uniform random source
// ─────────────────────────────────────────────────────────────

/// Draws the opposing category and the objective independently and
/// uniformly from an RNG.
#[derive(Debug, Clone)]
pub struct RandomChallenges<R = StdRng> {
    rng: R,
}

impl RandomChallenges<StdRng> {
    /// Seeds from the operating system. The production default.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic source for reproducible games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomChallenges<R> {
    /// Wraps an arbitrary RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChallengeSource for RandomChallenges<R> {
    fn next_challenge(&mut self) -> Challenge {
        let opposing = Category::ALL[self.rng.random_range(0..Category::ALL.len())];
        let objective = Objective::from_bool(self.rng.random_bool(0.5));
        let challenge = Challenge::new(opposing, objective);
        debug!(%challenge, "Rolled challenge");
        challenge
    }
}

// ─────────────────────────────────────────────────────────────
//  Scripted source
// ─────────────────────────────────────────────────────────────

/// Replays a fixed list of challenges, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedChallenges {
    script: Vec<Challenge>,
    cursor: usize,
}

impl ScriptedChallenges {
    /// Cycles through `script`. Returns `None` if it is empty.
    pub fn cycle(script: Vec<Challenge>) -> Option<Self> {
        if script.is_empty() {
            return None;
        }
        Some(Self { script, cursor: 0 })
    }

    /// Always yields the same challenge.
    pub fn repeat(challenge: Challenge) -> Self {
        Self {
            script: vec![challenge],
            cursor: 0,
        }
    }

    /// Number of challenges handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ChallengeSource for ScriptedChallenges {
    fn next_challenge(&mut self) -> Challenge {
        let challenge = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        challenge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_judge_win() {
        let challenge = Challenge::new(Category::Grass, Objective::Win);
        assert_eq!(challenge.judge(Category::Fire), RoundOutcome::Correct);
        assert_eq!(challenge.judge(Category::Water), RoundOutcome::Incorrect);
        assert_eq!(challenge.judge(Category::Grass), RoundOutcome::Incorrect);
    }

    #[test]
    fn test_judge_lose() {
        let challenge = Challenge::new(Category::Grass, Objective::Lose);
        assert_eq!(challenge.judge(Category::Water), RoundOutcome::Correct);
        assert_eq!(challenge.judge(Category::Fire), RoundOutcome::Incorrect);
        assert_eq!(challenge.judge(Category::Grass), RoundOutcome::Incorrect);
    }

    #[test]
    fn test_answer_is_the_only_correct_pick() {
        for opposing in Category::ALL {
            for objective in Objective::iter() {
                let challenge = Challenge::new(opposing, objective);
                let correct: Vec<_> = Category::ALL
                    .into_iter()
                    .filter(|c| challenge.judge(*c).is_correct())
                    .collect();
                assert_eq!(correct, vec![challenge.answer()]);
            }
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RandomChallenges::seeded(7);
        let mut b = RandomChallenges::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.next_challenge(), b.next_challenge());
        }
    }

    #[test]
    fn test_random_source_covers_all_combinations() {
        let mut source = RandomChallenges::seeded(42);
        let seen: HashSet<_> = (0..500).map(|_| source.next_challenge()).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_scripted_source_cycles() {
        let first = Challenge::new(Category::Fire, Objective::Win);
        let second = Challenge::new(Category::Water, Objective::Lose);
        let mut source = ScriptedChallenges::cycle(vec![first, second]).expect("non-empty");
        assert_eq!(source.next_challenge(), first);
        assert_eq!(source.next_challenge(), second);
        assert_eq!(source.next_challenge(), first);
        assert_eq!(source.drawn(), 3);
    }

    #[test]
    fn test_empty_script_rejected() {
        assert!(ScriptedChallenges::cycle(Vec::new()).is_none());
    }
}
