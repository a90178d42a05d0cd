//! Application state — single-owner, main-thread only.
//!
//! The dashboard holds the data and derived views; this struct adds the UI
//! state around it (active view, fund cursor, overlay, status line).

use fundlab_core::{Dashboard, ViewKind};

/// Status message severity.
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

/// Top-level application state.
pub struct AppState {
    pub dashboard: Dashboard,
    pub active_view: ViewKind,
    pub running: bool,

    /// Row of the fund list under the cursor.
    pub fund_cursor: usize,

    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            active_view: ViewKind::Line,
            running: true,
            fund_cursor: 0,
            overlay: Overlay::None,
            status_message: None,
        }
    }

    /// Fund universe, in sidebar order.
    pub fn funds(&self) -> &[String] {
        self.dashboard.table().funds()
    }

    /// Fund under the cursor.
    pub fn cursor_fund(&self) -> Option<&str> {
        self.funds().get(self.fund_cursor).map(String::as_str)
    }

    pub fn cursor_down(&mut self) {
        if self.fund_cursor + 1 < self.funds().len() {
            self.fund_cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.fund_cursor = self.fund_cursor.saturating_sub(1);
    }

    /// Toggle the fund under the cursor and report the outcome.
    pub fn toggle_cursor_fund(&mut self) {
        let Some(fund) = self.cursor_fund().map(String::from) else {
            return;
        };
        if self.dashboard.toggle_fund(&fund) {
            self.set_status(format!("Selected {fund}"));
        } else {
            self.set_status(format!("Deselected {fund}"));
        }
        self.warn_if_empty();
    }

    pub fn select_all(&mut self) {
        self.dashboard.select_all_funds();
        self.set_status("All funds selected");
    }

    pub fn clear_selection(&mut self) {
        self.dashboard.clear_funds();
        self.warn_if_empty();
    }

    /// Move the range start; warns when already pinned at a bound.
    pub fn shift_start(&mut self, delta: i32) {
        let before = self.dashboard.criteria().years;
        let after = self.dashboard.shift_start(delta);
        if after == before {
            self.set_warning(format!("Start year stays at {}", after.start()));
        } else {
            self.set_status(format!("Years {}–{}", after.start(), after.end()));
        }
    }

    /// Move the range end; warns when already pinned at a bound.
    pub fn shift_end(&mut self, delta: i32) {
        let before = self.dashboard.criteria().years;
        let after = self.dashboard.shift_end(delta);
        if after == before {
            self.set_warning(format!("End year stays at {}", after.end()));
        } else {
            self.set_status(format!("Years {}–{}", after.start(), after.end()));
        }
    }

    pub fn reset_filters(&mut self) {
        self.dashboard.reset_filters();
        self.set_status("Filters reset");
    }

    pub fn regenerate(&mut self) {
        self.dashboard.regenerate();
        self.set_status(format!(
            "Regenerated data (generation {})",
            self.dashboard.generation()
        ));
    }

    fn warn_if_empty(&mut self) {
        if self.dashboard.filtered().is_empty() {
            self.set_warning("No funds selected: every view shows no data");
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
