//! Rendering for the demo tab: Sign Up and Log In cards side by side.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::{TaskKind, TextField};
use crate::state::AppState;

use super::AuthFocus;

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(
        state,
        frame,
        columns[0],
        "Sign Up",
        &state.auth.signup.email,
        &state.auth.signup.password,
        AuthFocus::SignupEmail,
        AuthFocus::SignupPassword,
        TaskKind::Signup,
        "enter: sign up",
    );
    render_card(
        state,
        frame,
        columns[1],
        "Log In",
        &state.auth.login.email,
        &state.auth.login.password,
        AuthFocus::LoginEmail,
        AuthFocus::LoginPassword,
        TaskKind::Login,
        "enter: log in",
    );
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    state: &AppState,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    email: &TextField,
    password: &TextField,
    email_focus: AuthFocus,
    password_focus: AuthFocus,
    kind: TaskKind,
    hint: &str,
) {
    let section_focused = state.auth.focus == email_focus || state.auth.focus == password_focus;
    let border_style = if section_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        rows[0],
        "Email",
        email.value(),
        email.cursor_col(),
        state.auth.focus == email_focus,
    );
    render_field(
        frame,
        rows[1],
        "Password",
        &password.masked(),
        password.cursor_col(),
        state.auth.focus == password_focus,
    );

    let action = if state.tasks.state(kind).is_running() {
        Line::from(Span::styled(
            kind.in_flight_label(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };
    frame.render_widget(Paragraph::new(action), rows[2]);
}

/// Draws a bordered single-line input and places the terminal cursor when
/// the field is focused.
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &str,
    cursor_col: usize,
    focused: bool,
) {
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(Span::styled(display.to_string(), style)), inner);

    if focused && inner.width > 0 {
        let col = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((col, inner.y));
    }
}
