//! Score bounded invariant: the score never exceeds the rounds played.

use super::super::Scoreboard;
use super::Invariant;

/// Invariant: `0 <= score <= rounds_played`, and the score is exactly the
/// number of correct rounds in the history.
pub struct ScoreBoundedInvariant;

impl Invariant<Scoreboard> for ScoreBoundedInvariant {
    fn holds(board: &Scoreboard) -> bool {
        if board.round_index() < 1 || board.score() > board.rounds_played() {
            return false;
        }

        let correct = board
            .history()
            .iter()
            .filter(|record| record.outcome().is_correct())
            .count();

        usize::try_from(board.score()).is_ok_and(|score| score == correct)
    }

    fn description() -> &'static str {
        "Score is the number of correct rounds and never exceeds rounds played"
    }
}
