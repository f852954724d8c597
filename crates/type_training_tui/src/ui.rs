//! Screen rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Gauge, Paragraph},
};
use type_training::{Category, ChallengeSource, Phase, RoundOutcome, all_categories};

/// Color a category is drawn in.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Grass => Color::Green,
        Category::Fire => Color::Red,
        Category::Water => Color::Blue,
    }
}

/// Popup title for a resolved round.
pub fn outcome_title(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Correct => "Correct!",
        RoundOutcome::Incorrect => "Oops, that's not right!",
    }
}

/// Renders the whole screen.
pub fn render<S: ChallengeSource>(f: &mut Frame, app: &App<S>) {
    let [title, rival, options, progress, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let heading = Paragraph::new(Line::from(Span::styled(
        "Type Training",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::bordered());
    f.render_widget(heading, title);

    render_rival(f, rival, app);
    render_options(f, options);
    render_progress(f, progress, app);
    render_status(f, status, app);

    match app.session().phase() {
        Phase::InRound => {}
        Phase::RoundResolved => render_round_popup(f, app),
        Phase::GameOver => render_game_over_popup(f, app),
    }
}

fn render_rival<S: ChallengeSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let session = app.session();
    let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Your rival sent out a creature of type", dim)),
        Line::from(Span::styled(
            session.opposing().display_name(),
            Style::default()
                .fg(category_color(session.opposing()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Pick the type that would", dim)),
        Line::from(Span::styled(
            session.objective().label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_options(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = all_categories()
        .iter()
        .flat_map(|category| {
            let label = format!(" [{}] {:<8}", category.option_number(), category.display_name());
            let style = Style::default()
                .fg(Color::Black)
                .bg(category_color(*category))
                .add_modifier(Modifier::BOLD);
            [Line::from(Span::styled(label, style)), Line::default()]
        })
        .collect();
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_progress<S: ChallengeSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let session = app.session();
    let total = session.round_total();
    let shown = session.round_index().min(total);
    let gauge = Gauge::default()
        .block(Block::bordered().title("Battle!"))
        .gauge_style(Style::default().fg(Color::White))
        .ratio(f64::from(shown) / f64::from(total))
        .label(format!("Round {}/{}", shown, total));
    f.render_widget(gauge, area);
}

fn render_status<S: ChallengeSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            hint(app.session().phase()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn hint(phase: Phase) -> &'static str {
    match phase {
        Phase::InRound => "1-3 or g/f/w to choose, q to quit",
        Phase::RoundResolved => "Enter to continue, q to quit",
        Phase::GameOver => "Enter or r to restart, q to quit",
    }
}

fn render_round_popup<S: ChallengeSource>(f: &mut Frame, app: &App<S>) {
    let session = app.session();
    let title = session.outcome().map(outcome_title).unwrap_or_default();
    render_popup(
        f,
        title,
        format!("Your score is {}", session.score()),
        "[ Continue ]",
    );
}

fn render_game_over_popup<S: ChallengeSource>(f: &mut Frame, app: &App<S>) {
    render_popup(
        f,
        "Game over!",
        format!("Your final score is {}", app.session().score()),
        "[ Restart ]",
    );
}

fn render_popup(f: &mut Frame, title: &str, message: String, button: &str) {
    let area = center_rect(f.area(), 40, 7);
    let lines = vec![
        Line::default(),
        Line::from(message),
        Line::default(),
        Line::from(Span::styled(button, Style::default().add_modifier(Modifier::BOLD))),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(Line::from(title.to_string()).centered()));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use type_training::{Challenge, Objective, ScriptedChallenges, Session};

    fn screen<S: ChallengeSource>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App<ScriptedChallenges> {
        let challenge = Challenge::new(Category::Fire, Objective::Lose);
        App::new(Session::with_source(ScriptedChallenges::repeat(challenge)))
    }

    #[test]
    fn test_in_round_screen() {
        let text = screen(&app());
        assert!(text.contains("Type Training"));
        assert!(text.contains("Fire"));
        assert!(text.contains("LOSE"));
        assert!(text.contains("[1] Grass"));
        assert!(text.contains("[2] Fire"));
        assert!(text.contains("[3] Water"));
        assert!(text.contains("Round 1/10"));
    }

    #[test]
    fn test_round_popup() {
        let mut app = app();
        app.handle_key(crossterm::event::KeyCode::Char('1'));
        let text = screen(&app);
        assert!(text.contains("Correct!"));
        assert!(text.contains("Your score is 1"));
    }

    #[test]
    fn test_game_over_popup() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_key(crossterm::event::KeyCode::Char('3'));
            app.handle_key(crossterm::event::KeyCode::Enter);
        }
        let text = screen(&app);
        assert!(text.contains("Game over!"));
        assert!(text.contains("Your final score is 0"));
        assert!(text.contains("Round 10/10"));
    }

    #[test]
    fn test_outcome_titles() {
        assert_eq!(outcome_title(RoundOutcome::Correct), "Correct!");
        assert_eq!(outcome_title(RoundOutcome::Incorrect), "Oops, that's not right!");
    }
}
