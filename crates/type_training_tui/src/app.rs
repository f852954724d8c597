//! Application state and key handling.
//!
//! The app never judges anything itself: it maps a key to the one action
//! the current phase allows and forwards it to the session.

use crossterm::event::KeyCode;
use tracing::{debug, error};
use type_training::{Action, Category, ChallengeSource, Phase, RandomChallenges, Session};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App<S = RandomChallenges> {
    session: Session<S>,
    status_message: Option<String>,
}

impl<S: ChallengeSource> App<S> {
    /// Creates a new application around a session.
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            status_message: None,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Gets the current status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q')) {
            debug!("Quit requested");
            return Control::Quit;
        }

        match action_for_key(self.session.phase(), key) {
            Some(action) => self.dispatch(action),
            None => debug!(?key, phase = %self.session.phase(), "Key ignored"),
        }
        Control::Continue
    }

    fn dispatch(&mut self, action: Action) {
        match self.session.apply(action) {
            Ok(phase) => {
                debug!(%action, %phase, "Action applied");
                self.status_message = None;
            }
            Err(e) => {
                error!(error = %e, "Session rejected action");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

/// Maps a key to the action legal in `phase`.
pub fn action_for_key(phase: Phase, key: KeyCode) -> Option<Action> {
    match (phase, key) {
        (Phase::InRound, KeyCode::Char(c)) => category_for_key(c).map(Action::Choose),
        (Phase::RoundResolved, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::Acknowledge),
        (Phase::GameOver, KeyCode::Enter | KeyCode::Char(' ' | 'r')) => Some(Action::Restart),
        _ => None,
    }
}

/// Option number (`1`-`3`) or initial letter of a category.
pub fn category_for_key(c: char) -> Option<Category> {
    if c.is_ascii_digit() {
        return Category::from_label_or_number(&c.to_string());
    }

    let initial = c.to_ascii_uppercase();
    Category::ALL
        .into_iter()
        .find(|category| category.display_name().starts_with(initial))
}
