//! Rendering for the status line.

use authtour_core::flow::StatusKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Spinner frames for the in-flight indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Current spinner glyph for an animation counter.
pub fn spinner_frame(counter: usize) -> &'static str {
    SPINNER_FRAMES[counter % SPINNER_FRAMES.len()]
}

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(kind) = state.tasks.running_kind() {
        Line::from(vec![
            Span::styled(
                spinner_frame(state.spinner_frame),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled(kind.in_flight_label(), Style::default().fg(Color::Yellow)),
        ])
    } else if let Some(status) = &state.flow.status {
        let color = match status.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(color),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}
