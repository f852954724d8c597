//! Contract-based validation for session transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions are always checked; postconditions in debug builds.

use super::action::{Action, SessionError};
use super::invariants::{InvariantSet, TypeTrainingInvariants};
use super::session::Scoreboard;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session is in the phase the action requires.
pub struct PhaseAllows;

impl PhaseAllows {
    /// Rejects the action unless the phases match.
    #[instrument(skip(board))]
    pub fn check(action: &Action, board: &Scoreboard) -> Result<(), SessionError> {
        let phase = board.phase();
        if action.required_phase() != phase {
            warn!(%action, %phase, "Action rejected: wrong phase");
            return Err(SessionError::WrongPhase {
                action: *action,
                phase,
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: score never goes down, except when a restart resets the
/// whole scoreboard to round 1.
pub struct ScoreMonotonic;

impl ScoreMonotonic {
    /// Returns true if the transition kept the score monotonic.
    pub fn holds(before: &Scoreboard, after: &Scoreboard) -> bool {
        let restarted = after.round_index() == 1 && after.history().is_empty();
        let valid = restarted || after.score() >= before.score();
        if !valid {
            warn!(before = before.score(), after = after.score(), "Score decreased");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract shared by every session action.
///
/// Preconditions:
/// - Session is in the action's required phase
///
/// Postconditions:
/// - All scoreboard invariants hold
/// - Score is monotonic outside restarts
pub struct TransitionContract;

impl Contract<Scoreboard, Action> for TransitionContract {
    fn pre(board: &Scoreboard, action: &Action) -> Result<(), SessionError> {
        PhaseAllows::check(action, board)
    }

    fn post(before: &Scoreboard, after: &Scoreboard) -> Result<(), SessionError> {
        let mut descriptions = match TypeTrainingInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !ScoreMonotonic::holds(before, after) {
            descriptions.push("Score never decreases outside restart".to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(SessionError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}
