//! Application state — single-owner, main-thread only.
//!
//! The container owns exactly two pieces of cross-view state: which view is
//! shown and which process id was last selected. Catalogue data is immutable;
//! everything derived from it is recomputed on render.

use riskchain_core::Catalog;

/// Which view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Process,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Process => "Process Detail",
        }
    }
}

/// Status message severity for the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Dashboard list cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardState {
    pub cursor: usize,
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,

    // View selector — the only runtime-mutable state.
    pub view: View,
    pub selected_process: Option<String>,

    pub dashboard: DashboardState,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: View::Dashboard,
            selected_process: None,
            dashboard: DashboardState::default(),
            overlay: Overlay::None,
            status_message: None,
            running: true,
        }
    }

    /// Remember the selection and switch to the detail view.
    ///
    /// The id is not validated and the detail view does not consult it; it
    /// always renders the one built-in chain. Matches the source behavior.
    pub fn select_process(&mut self, id: impl Into<String>) {
        let id = id.into();
        let title = self
            .catalog
            .summary(&id)
            .map(|s| s.title)
            .unwrap_or("unknown process");
        self.set_status(format!("Viewing {title}"));
        self.selected_process = Some(id);
        self.view = View::Process;
    }

    /// Return to the list view and forget the selection.
    pub fn back_to_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.selected_process = None;
        self.set_status("Back to dashboard");
    }

    /// Move the dashboard cursor down, clamped to the card list.
    pub fn cursor_down(&mut self) {
        let count = self.catalog.total();
        if count > 0 && self.dashboard.cursor + 1 < count {
            self.dashboard.cursor += 1;
        }
    }

    /// Move the dashboard cursor up.
    pub fn cursor_up(&mut self) {
        self.dashboard.cursor = self.dashboard.cursor.saturating_sub(1);
    }

    /// Select the process under the cursor, if any.
    pub fn select_under_cursor(&mut self) {
        if let Some(summary) = self.catalog.summaries().get(self.dashboard.cursor) {
            let id = summary.id.to_string();
            self.select_process(id);
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    #[allow(dead_code)]
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(Catalog::builtin())
    }

    #[test]
    fn starts_on_dashboard_with_no_selection() {
        let app = app();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.selected_process.is_none());
        assert!(app.running);
    }

    #[test]
    fn select_then_back_round_trip() {
        let mut app = app();
        app.select_process("3");
        assert_eq!(app.view, View::Process);
        assert_eq!(app.selected_process.as_deref(), Some("3"));

        app.back_to_dashboard();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.selected_process.is_none());
    }

    #[test]
    fn selecting_unknown_id_still_switches_view() {
        // No validation by design; detail ignores the id anyway.
        let mut app = app();
        app.select_process("99");
        assert_eq!(app.view, View::Process);
        assert_eq!(app.selected_process.as_deref(), Some("99"));
    }

    #[test]
    fn cursor_clamps_to_card_list() {
        let mut app = app();
        for _ in 0..20 {
            app.cursor_down();
        }
        assert_eq!(app.dashboard.cursor, app.catalog.total() - 1);
        for _ in 0..20 {
            app.cursor_up();
        }
        assert_eq!(app.dashboard.cursor, 0);
    }

    #[test]
    fn select_under_cursor_uses_list_order() {
        let mut app = app();
        app.cursor_down();
        app.cursor_down();
        app.select_under_cursor();
        assert_eq!(app.selected_process.as_deref(), Some("3"));
        assert_eq!(app.view, View::Process);
    }
}
