//! History consistent invariant: the history matches the counters.

use super::super::Scoreboard;
use super::Invariant;

/// Invariant: one history entry per resolved round, numbered `1..=n`, each
/// judged correctly, with the visible outcome equal to the latest entry.
pub struct HistoryConsistentInvariant;

impl Invariant<Scoreboard> for HistoryConsistentInvariant {
    fn holds(board: &Scoreboard) -> bool {
        let history = board.history();

        if u32::try_from(history.len()).ok() != Some(board.rounds_played()) {
            return false;
        }

        let numbered = history
            .iter()
            .zip(1u32..)
            .all(|(record, expected)| *record.round() == expected);
        if !numbered {
            return false;
        }

        let judged = history
            .iter()
            .all(|record| record.challenge().judge(*record.selected()) == *record.outcome());
        if !judged {
            return false;
        }

        match board.outcome() {
            Some(outcome) => history.last().is_some_and(|last| *last.outcome() == outcome),
            None => true,
        }
    }

    fn description() -> &'static str {
        "History has one correctly judged entry per resolved round"
    }
}
