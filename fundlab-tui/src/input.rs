//! Keyboard input dispatch — overlay → global keys → filter keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use fundlab_core::ViewKind;

use crate::app::{AppState, Overlay};

/// Handle a key event. Every filter change re-derives the views before the
/// next frame is drawn.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.overlay = Overlay::None,
            _ => {}
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            if let Some(kind) = ViewKind::from_index(idx) {
                app.active_view = kind;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_view = app.active_view.prev();
            } else {
                app.active_view = app.active_view.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_view = app.active_view.prev();
            return;
        }
        _ => {}
    }

    // 3. Filter keys.
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_fund(),
        KeyCode::Char('a') => app.select_all(),
        KeyCode::Char('d') => app.clear_selection(),
        KeyCode::Char('h') | KeyCode::Left => app.shift_start(-1),
        KeyCode::Char('l') | KeyCode::Right => app.shift_start(1),
        KeyCode::Char('H') => app.shift_end(-1),
        KeyCode::Char('L') => app.shift_end(1),
        KeyCode::Char('0') => app.reset_filters(),
        KeyCode::Char('r') => app.regenerate(),
        _ => {}
    }
}
