//! Core value types for a round.

use serde::{Deserialize, Serialize};

/// Number of rounds in one game.
pub const ROUND_TOTAL: u32 = 10;

/// What the player must achieve against the opposing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Objective {
    /// Pick the category that beats the opponent.
    Win,
    /// Pick the category the opponent beats.
    Lose,
}

impl Objective {
    /// Converts from the "should win" flag.
    pub fn from_bool(should_win: bool) -> Self {
        if should_win {
            Objective::Win
        } else {
            Objective::Lose
        }
    }

    /// Returns true for [`Objective::Win`].
    pub fn is_win(self) -> bool {
        matches!(self, Objective::Win)
    }

    /// Label shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Objective::Win => "WIN",
            Objective::Lose => "LOSE",
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of a resolved choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundOutcome {
    /// The pick satisfied the objective.
    #[display("correct")]
    Correct,
    /// The pick did not satisfy the objective.
    #[display("incorrect")]
    Incorrect,
}

impl RoundOutcome {
    /// Returns true for [`RoundOutcome::Correct`].
    pub fn is_correct(self) -> bool {
        matches!(self, RoundOutcome::Correct)
    }
}

impl From<bool> for RoundOutcome {
    fn from(correct: bool) -> Self {
        if correct {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect
        }
    }
}

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Awaiting the player's choice.
    #[display("in round")]
    InRound,
    /// Outcome available, awaiting acknowledgment.
    #[display("round resolved")]
    RoundResolved,
    /// Terminal, awaiting restart.
    #[display("game over")]
    GameOver,
}
