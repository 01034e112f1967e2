//! Rendering for the tutorial tab.

use authtour_core::tutorial;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::markdown::{self, MarkdownOptions};
use crate::state::AppState;

/// Left/right padding inside the tutorial pane.
const MARGIN: u16 = 1;

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let inner = Rect {
        x: area.x + MARGIN,
        y: area.y,
        width: area.width.saturating_sub(MARGIN * 2),
        height: area.height,
    };
    let width = inner.width as usize;

    let lines = build_lines(state, width);
    state.tutorial.line_count.set(lines.len());

    let visible = inner.height as usize;
    let scroll = state
        .tutorial
        .scroll
        .min(lines.len().saturating_sub(visible));
    let end = (scroll + visible).min(lines.len());

    frame.render_widget(Paragraph::new(lines[scroll..end].to_vec()), inner);
}

/// Builds the full line list for every step at the given width.
fn build_lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut block_base = 0usize;

    for step in tutorial::steps() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", step.number, step.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            step.summary.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());

        let opts = MarkdownOptions {
            width,
            block_base,
            selected_block: Some(state.tutorial.selected_block),
            copied: state.tutorial.copied(),
        };
        let (body, count) = markdown::render_markdown(step.body, &opts);
        lines.extend(body);
        block_base += count;
        lines.push(Line::default());
    }

    lines
}
