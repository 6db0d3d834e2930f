//! Keyboard input dispatch — overlay first, then global keys, then the
//! active view's handler.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, View};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. An open overlay consumes input.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        // The one wired navigation control: jump to the dashboard.
        KeyCode::Char('d') | KeyCode::Char('1') => {
            if app.view != View::Dashboard {
                app.back_to_dashboard();
            }
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.view {
        View::Dashboard => handle_dashboard_key(app, key),
        View::Process => handle_detail_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter => app.select_under_cursor(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.back_to_dashboard();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskchain_core::Catalog;

    fn app() -> AppState {
        AppState::new(Catalog::builtin())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn quit_on_q() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn quit_on_ctrl_c() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn enter_on_card_opens_detail() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view, View::Process);
        assert_eq!(app.selected_process.as_deref(), Some("3"));
    }

    #[test]
    fn esc_returns_and_clears_selection() {
        let mut app = app();
        app.select_process("5");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view, View::Dashboard);
        assert!(app.selected_process.is_none());
    }

    #[test]
    fn dashboard_key_jumps_home_from_detail() {
        let mut app = app();
        app.select_process("2");
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.view, View::Dashboard);
        assert!(app.selected_process.is_none());
    }

    #[test]
    fn vim_navigation_moves_cursor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.dashboard.cursor, 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.dashboard.cursor, 0);
    }

    #[test]
    fn help_overlay_opens_and_any_key_closes() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
        // The dismissing key is consumed, not dispatched to the view.
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn detail_ignores_list_keys() {
        let mut app = app();
        app.select_process("1");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view, View::Process);
    }
}
