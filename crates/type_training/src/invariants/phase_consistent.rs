//! Phase consistent invariant: the phase agrees with the round counter.

use super::super::{Phase, ROUND_TOTAL, Scoreboard};
use super::Invariant;

/// Invariant: the phase matches the round counter and outcome.
///
/// - `InRound`: no outcome, `round_index <= ROUND_TOTAL`
/// - `RoundResolved`: outcome present, `2 <= round_index <= ROUND_TOTAL + 1`
/// - `GameOver`: outcome present, `round_index > ROUND_TOTAL`
pub struct PhaseConsistentInvariant;

impl Invariant<Scoreboard> for PhaseConsistentInvariant {
    fn holds(board: &Scoreboard) -> bool {
        let round = board.round_index();
        let has_outcome = board.outcome().is_some();

        match board.phase() {
            Phase::InRound => !has_outcome && (1..=ROUND_TOTAL).contains(&round),
            Phase::RoundResolved => has_outcome && (2..=ROUND_TOTAL + 1).contains(&round),
            Phase::GameOver => has_outcome && round > ROUND_TOTAL,
        }
    }

    fn description() -> &'static str {
        "Phase agrees with the round counter and outcome"
    }
}
