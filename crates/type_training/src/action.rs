//! First-class action types for a session.
//!
//! Actions are the player's intent as data. Each one names the phase it is
//! legal in, so contracts can validate it before anything is mutated.

use super::category::Category;
use super::types::Phase;
use serde::{Deserialize, Serialize};

/// Something the host asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The player picked a category.
    Choose(Category),
    /// The player dismissed the round feedback.
    Acknowledge,
    /// The player asked for a new game.
    Restart,
}

impl Action {
    /// The only phase in which this action is legal.
    pub fn required_phase(&self) -> Phase {
        match self {
            Action::Choose(_) => Phase::InRound,
            Action::Acknowledge => Phase::RoundResolved,
            Action::Restart => Phase::GameOver,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Choose(category) => write!(f, "choose {}", category),
            Action::Acknowledge => write!(f, "acknowledge"),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// Error raised when a transition is requested or completed incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The action is not legal in the current phase.
    #[display("Cannot {} while {}", action, phase)]
    WrongPhase {
        /// The rejected action.
        action: Action,
        /// The phase the session was in.
        phase: Phase,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
