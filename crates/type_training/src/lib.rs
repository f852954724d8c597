//! Type Training game logic.
//!
//! A single-screen quiz: the player sees a rival category and an objective
//! (win or lose against it), picks one of three categories, and gets
//! immediate feedback over a fixed number of rounds.
//!
//! # Architecture
//!
//! - **Categories**: three values in a cyclic dominance relation
//! - **Challenges**: what a round asks, rolled from an injectable source
//! - **Session**: the round/game state machine (`InRound` → `RoundResolved`
//!   → `InRound` ... → `GameOver`)
//! - **Contracts & invariants**: every transition is checked
//!
//! # Example
//!
//! ```
//! use type_training::{Phase, Session};
//!
//! let mut session = Session::seeded(42);
//! let answer = session.challenge().answer();
//! session.choose(answer)?;
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.acknowledge()?, Phase::InRound);
//! # Ok::<(), type_training::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod category;
mod challenge;
mod contracts;
mod invariants;
mod session;
mod types;

pub use action::{Action, SessionError};
pub use category::{Category, all_categories, beats, display_name};
pub use challenge::{Challenge, ChallengeSource, RandomChallenges, ScriptedChallenges};
pub use contracts::{Contract, PhaseAllows, ScoreMonotonic, TransitionContract};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    PhaseConsistentInvariant, ScoreBoundedInvariant, TypeTrainingInvariants,
};
pub use session::{RoundRecord, Scoreboard, Session};
pub use types::{Objective, Phase, ROUND_TOTAL, RoundOutcome};
