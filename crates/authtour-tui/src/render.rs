//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects. (The tutorial pane's
//! rendered line count is published through a `Cell` so the reducer can
//! clamp scrolling without re-rendering.)

use authtour_core::flow::View;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::features::{auth, dashboard, statusline, tutorial, verify};
use crate::state::AppState;

/// Height of the two-line header (title + backend URL).
const HEADER_HEIGHT: u16 = 2;
/// Height of the tab bar.
const TABS_HEIGHT: u16 = 1;
/// Height of the status line.
const STATUS_HEIGHT: u16 = 1;
/// Height of the key-hint line.
const HINTS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .split(area);

    render_header(state, frame, rows[0]);
    render_tabs(state, frame, rows[1]);

    match state.flow.view() {
        View::Tutorial => tutorial::render(state, frame, rows[2]),
        View::Auth => auth::render(state, frame, rows[2]),
        View::Verify => verify::render(state, frame, rows[2]),
        View::Dashboard => dashboard::render(state, frame, rows[2]),
    }

    statusline::render(state, frame, rows[3]);
    render_hints(state, frame, rows[4]);
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Email Authentication Tutorial",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Backend: {}", state.base_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(state: &AppState, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = View::all()
        .iter()
        .map(|view| {
            let reachable = state.flow.can_enter(*view);
            let style = if reachable {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(view.label(), style))
        })
        .collect();

    let selected = View::all()
        .iter()
        .position(|v| *v == state.flow.view())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)));
    frame.render_widget(tabs, area);
}

fn render_hints(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match state.flow.view() {
        View::Tutorial => "tab: switch view  j/k: scroll  [/]: select code  c: copy  q: quit",
        View::Auth => "tab: switch view  up/down: field  enter: submit  ctrl+c: quit",
        View::Verify => "tab: switch view  enter: verify  ctrl+c: quit",
        View::Dashboard => "tab: switch view  l: log out  q: quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
