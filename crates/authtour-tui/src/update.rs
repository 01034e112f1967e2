//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use authtour_core::flow::View;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// Verification codes are 5 digits in this flow; the input is capped to
/// match the reference UI.
const VERIFY_CODE_MAX_LEN: usize = 5;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            // Clear the copy confirmation once its flash elapsed
            state.tutorial.check_copy_timeout();
            vec![]
        }
        UiEvent::Frame { width, height } => {
            state.viewport = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, &term_event),
        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(state, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::SignupResult { email, result } => {
            state.flow.resolve_signup(&email, result);
            if state.flow.view() == View::Verify {
                // Fresh code entry for the new registration
                state.verify.clear();
            }
            vec![]
        }
        UiEvent::VerifyResult { result } => {
            let succeeded = result.is_ok();
            state.flow.resolve_verification(result);
            if succeeded {
                state.verify.clear();
            }
            vec![]
        }
        UiEvent::LoginResult { result } => match result {
            Ok(login) => {
                let token = login.access_token.clone();
                state.flow.resolve_login(Ok(login.user));
                vec![UiEffect::PersistToken { token }]
            }
            Err(err) => {
                state.flow.resolve_login(Err(err));
                vec![]
            }
        },
        UiEvent::ClipboardCopied => {
            state.tutorial.mark_copied();
            vec![]
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, *key),
        Event::Paste(text) => {
            handle_paste(state, text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // Tab navigation is global; unreachable views are skipped.
    match key.code {
        KeyCode::Tab => {
            navigate_relative(state, 1);
            return vec![];
        }
        KeyCode::BackTab => {
            navigate_relative(state, -1);
            return vec![];
        }
        _ => {}
    }

    match state.flow.view() {
        View::Tutorial => handle_tutorial_key(state, key),
        View::Auth => handle_auth_key(state, key),
        View::Verify => handle_verify_key(state, key),
        View::Dashboard => handle_dashboard_key(state, key),
    }
}

/// Moves to the next/previous reachable view in tab order.
fn navigate_relative(state: &mut AppState, delta: isize) {
    let all = View::all();
    let len = all.len() as isize;
    let current = all
        .iter()
        .position(|v| *v == state.flow.view())
        .unwrap_or(0) as isize;

    for step in 1..=len {
        let idx = (current + delta * step).rem_euclid(len) as usize;
        if state.flow.can_enter(all[idx]) {
            state.flow.navigate(all[idx]);
            return;
        }
    }
}

fn handle_tutorial_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let page = state.content_height().max(1);
    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => state.tutorial.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.tutorial.scroll_down(1, page),
        KeyCode::PageUp => state.tutorial.scroll_up(page),
        KeyCode::PageDown => state.tutorial.scroll_down(page, page),
        KeyCode::Char('g') | KeyCode::Home => state.tutorial.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => state.tutorial.scroll_to_bottom(page),
        KeyCode::Char(']') => state.tutorial.select_next_block(),
        KeyCode::Char('[') => state.tutorial.select_prev_block(),
        KeyCode::Char('c') | KeyCode::Char('y') => {
            if let Some(code) = state.tutorial.selected_code() {
                return vec![UiEffect::CopyToClipboard {
                    text: code.to_string(),
                }];
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up => state.auth.focus = state.auth.focus.prev(),
        KeyCode::Down => state.auth.focus = state.auth.focus.next(),
        KeyCode::Enter => return submit_auth(state),
        KeyCode::Left => state.auth.focused_field_mut().move_left(),
        KeyCode::Right => state.auth.focused_field_mut().move_right(),
        KeyCode::Home => state.auth.focused_field_mut().move_home(),
        KeyCode::End => state.auth.focused_field_mut().move_end(),
        KeyCode::Backspace => state.auth.focused_field_mut().backspace(),
        KeyCode::Char(c) => state.auth.focused_field_mut().insert(c),
        _ => {}
    }
    vec![]
}

/// Submits the form the focus sits in. Ignored while a request is in flight
/// so a single user action never puts two requests of a kind in flight.
fn submit_auth(state: &mut AppState) -> Vec<UiEffect> {
    if state.tasks.is_any_running() {
        return vec![];
    }

    state.flow.begin_request();
    let task = state.task_seq.next_id();

    if state.auth.focus.is_signup() {
        vec![UiEffect::SubmitSignup {
            task,
            email: state.auth.signup.email.value().to_string(),
            password: state.auth.signup.password.value().to_string(),
        }]
    } else {
        vec![UiEffect::SubmitLogin {
            task,
            email: state.auth.login.email.value().to_string(),
            password: state.auth.login.password.value().to_string(),
        }]
    }
}

fn handle_verify_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => return submit_verification(state),
        KeyCode::Left => state.verify.code.move_left(),
        KeyCode::Right => state.verify.code.move_right(),
        KeyCode::Home => state.verify.code.move_home(),
        KeyCode::End => state.verify.code.move_end(),
        KeyCode::Backspace => state.verify.code.backspace(),
        KeyCode::Char(c) => {
            if state.verify.code.value().chars().count() < VERIFY_CODE_MAX_LEN {
                state.verify.code.insert(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn submit_verification(state: &mut AppState) -> Vec<UiEffect> {
    if state.tasks.is_any_running() {
        return vec![];
    }
    // Unreachable without a pending registration, but guard anyway.
    let Some(pending) = &state.flow.pending else {
        return vec![];
    };
    let email = pending.email.clone();

    state.flow.begin_request();
    let task = state.task_seq.next_id();
    vec![UiEffect::SubmitVerification {
        task,
        email,
        code: state.verify.code.value().to_string(),
    }]
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('l') => logout(state),
        _ => vec![],
    }
}

/// Local logout: resets the flow, wipes every draft and removes the stored
/// token. No backend call.
fn logout(state: &mut AppState) -> Vec<UiEffect> {
    state.flow.logout();
    state.auth.clear_all();
    state.verify.clear();
    vec![UiEffect::ClearStoredToken]
}

fn handle_paste(state: &mut AppState, text: &str) {
    match state.flow.view() {
        View::Auth => state.auth.focused_field_mut().insert_str(text),
        View::Verify => {
            for c in text.chars().filter(|c| !c.is_control()) {
                if state.verify.code.value().chars().count() >= VERIFY_CODE_MAX_LEN {
                    break;
                }
                state.verify.code.insert(c);
            }
        }
        View::Tutorial | View::Dashboard => {}
    }
}
