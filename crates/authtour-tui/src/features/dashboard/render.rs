//! Rendering for the dashboard tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Dashboard ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    // Guarded navigation means a session is always present here, but render
    // defensively anyway.
    let Some(user) = &state.flow.session else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No active session",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    };

    let verified = if user.is_verified { "Yes" } else { "No" };
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to your account",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            user.email.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Account verified: {verified}"),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("User ID: ", Style::default().fg(Color::DarkGray)),
            Span::raw(user.id.clone()),
        ]),
        Line::from(vec![
            Span::styled("Created: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_created_at(&user.created_at)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "l: log out",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Formats the account creation timestamp as a date, falling back to the raw
/// string when the backend used a format chrono can't parse.
fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
