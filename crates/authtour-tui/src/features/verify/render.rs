//! Rendering for the verify tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::TaskKind;
use crate::features::auth::render_field;
use crate::state::AppState;

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Email Verification ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let intro = match &state.flow.pending {
        Some(pending) => format!("Enter the 5-digit code sent to {}", pending.email),
        None => "No registration pending".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            intro,
            Style::default().fg(Color::Gray),
        ))),
        rows[0],
    );

    render_field(
        frame,
        rows[1],
        "Verification code",
        state.verify.code.value(),
        state.verify.code.cursor_col(),
        true,
    );

    let action = if state.tasks.state(TaskKind::Verify).is_running() {
        Line::from(Span::styled(
            TaskKind::Verify.in_flight_label(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "enter: verify email",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(action), rows[2]);
}
