//! Keyboard event handling.
//!
//! This module manages keyboard input with two modes:
//! - Normal mode:
//!   - `i`: edit the query text
//!   - `r`: reset the input to the default query
//!   - `?`: show help
//!   - `q` or `Ctrl+C`: quit
//! - Insert mode:
//!   - printable characters insert at the cursor
//!   - `Enter`: insert a line break
//!   - `Backspace`: delete before the cursor
//!   - `Left`/`Right`: move the cursor
//!   - `Esc`: back to normal mode

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};
use crate::sequence::DEFAULT_QUERY;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Enter insert mode
    EnterInsertMode,
    /// Leave insert mode
    LeaveInsertMode,
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a line break at the cursor
    InsertNewline,
    /// Delete the character before the cursor
    Backspace,
    /// Move the cursor one character left
    CursorLeft,
    /// Move the cursor one character right
    CursorRight,
    /// Reset the input to the default query
    ResetInput,
    /// Show the help overlay
    ShowHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode, show_help),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Insert => handle_insert_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    // Handle Ctrl+C for emergency quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('i') => Action::EnterInsertMode,
        KeyCode::Char('r') => Action::ResetInput,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        _ => Action::None,
    }
}

/// Handles key events in insert mode.
fn handle_insert_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Esc => Action::LeaveInsertMode,
        KeyCode::Enter => Action::InsertNewline,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Char(c) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.quit();
        }
        Action::EnterInsertMode => {
            state.enter_insert_mode();
        }
        Action::LeaveInsertMode => {
            state.leave_insert_mode();
        }
        Action::InsertChar(c) => {
            state.insert_char(c);
        }
        Action::InsertNewline => {
            state.insert_newline();
        }
        Action::Backspace => {
            state.backspace();
        }
        Action::CursorLeft => {
            state.move_cursor_left();
        }
        Action::CursorRight => {
            state.move_cursor_right();
        }
        Action::ResetInput => {
            state.reset_input(DEFAULT_QUERY);
        }
        Action::ShowHelp => {
            state.open_help();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::Resize(_, _) => {
            // Layout follows the frame size on the next draw
        }
    }

    !state.should_quit
}
