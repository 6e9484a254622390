//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Interaction State for the Catalog Browser
//!
//! Tracks ephemeral UI state: list selection, input mode, the single active
//! overlay, filter-menu cursor, detail scroll offset and notifications.
//! Query inputs (search text, filter, sort) are not stored here; they live in
//! the catalog store's query so there is only one copy of them.

use std::time::Instant;

use compact_str::CompactString;

/// Input modes for keyboard-driven workflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIMode {
    #[default]
    Browse,
    /// Keystrokes edit the search text.
    Search,
}

/// All overlays (mutually exclusive modals).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
    FilterMenu,
    Detail,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct UIState {
    /// Index into the visible list.
    pub selected: Option<usize>,
    pub mode: UIMode,
    pub overlay: UIOverlay,
    /// Cursor into the filter menu options.
    pub menu_cursor: usize,
    /// First visible line of the detail body.
    pub detail_scroll: u16,
    /// Rows available to the list, refreshed on resize.
    pub page_size: usize,
    pub notification: Option<Notification>,
    /// Auto-dismiss window for info notifications.
    pub notification_ms: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            selected: None,
            mode: UIMode::Browse,
            overlay: UIOverlay::None,
            menu_cursor: 0,
            detail_scroll: 0,
            page_size: 10,
            notification: None,
            notification_ms: 3000,
        }
    }

    // --- Selection ---

    pub fn move_selection_up(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(self.selected.map_or(0, |s| s.saturating_sub(1)));
        }
    }

    pub fn move_selection_down(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(self.selected.map_or(0, |s| (s + 1).min(len - 1)));
        }
    }

    pub fn page_up(&mut self, len: usize) {
        if len > 0 {
            let step = self.page_size.max(1);
            self.selected = Some(self.selected.map_or(0, |s| s.saturating_sub(step)));
        }
    }

    pub fn page_down(&mut self, len: usize) {
        if len > 0 {
            let step = self.page_size.max(1);
            self.selected = Some(self.selected.map_or(0, |s| (s + step).min(len - 1)));
        }
    }

    /// Keeps the selection inside a list of `len` rows after the list changed.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(s), len) => Some(s.min(len - 1)),
        };
    }

    // --- Modes/overlays ---

    pub fn set_overlay(&mut self, overlay: UIOverlay) {
        self.overlay = overlay;
    }

    pub fn toggle_help_overlay(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            _ => UIOverlay::Help,
        };
    }

    pub fn close_all_overlays(&mut self) {
        self.overlay = UIOverlay::None;
    }

    pub fn enter_search_mode(&mut self) {
        self.mode = UIMode::Search;
        self.overlay = UIOverlay::None;
    }

    pub fn exit_search_mode(&mut self) {
        self.mode = UIMode::Browse;
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.mode == UIMode::Search
    }

    // --- Filter menu ---

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self, len: usize) {
        if len > 0 {
            self.menu_cursor = (self.menu_cursor + 1).min(len - 1);
        }
    }

    // --- Detail ---

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// `max` is the last line of the detail body that may sit at the top.
    pub fn scroll_detail_down(&mut self, max: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(1).min(max);
    }

    // --- Notifications ---

    pub fn show_notification(
        &mut self,
        message: impl Into<CompactString>,
        level: NotificationLevel,
        auto_dismiss_ms: Option<u64>,
    ) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss_ms,
        });
    }

    /// Warnings stay up twice as long as info messages.
    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        let window = self.notification_ms.saturating_mul(2);
        self.show_notification(message, NotificationLevel::Warning, Some(window));
    }

    /// Errors stay until dismissed.
    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Error, None);
    }

    pub fn show_success(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Success, Some(self.notification_ms));
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drops an expired notification. Returns true if one was dismissed.
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(auto_dismiss_ms) = notification.auto_dismiss_ms
            && notification.timestamp.elapsed().as_millis() > u128::from(auto_dismiss_ms)
        {
            self.notification = None;
            return true;
        }
        false
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut ui = UIState::new();
        ui.move_selection_down(3);
        assert_eq!(ui.selected, Some(0));
        ui.move_selection_down(3);
        ui.move_selection_down(3);
        ui.move_selection_down(3);
        assert_eq!(ui.selected, Some(2));
        ui.move_selection_up(3);
        assert_eq!(ui.selected, Some(1));

        ui.move_selection_down(0);
        assert_eq!(ui.selected, Some(1));
    }

    #[test]
    fn paging_moves_by_page_size() {
        let mut ui = UIState::new();
        ui.page_size = 4;
        ui.selected = Some(0);
        ui.page_down(10);
        assert_eq!(ui.selected, Some(4));
        ui.page_down(10);
        ui.page_down(10);
        assert_eq!(ui.selected, Some(9));
        ui.page_up(10);
        assert_eq!(ui.selected, Some(5));
    }

    #[test]
    fn clamp_follows_list_length() {
        let mut ui = UIState::new();
        ui.clamp_selection(5);
        assert_eq!(ui.selected, Some(0));
        ui.selected = Some(4);
        ui.clamp_selection(2);
        assert_eq!(ui.selected, Some(1));
        ui.clamp_selection(0);
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn help_toggles_and_search_mode_closes_overlays() {
        let mut ui = UIState::new();
        ui.toggle_help_overlay();
        assert_eq!(ui.overlay, UIOverlay::Help);
        ui.enter_search_mode();
        assert!(ui.is_searching());
        assert_eq!(ui.overlay, UIOverlay::None);
        ui.exit_search_mode();
        assert_eq!(ui.mode, UIMode::Browse);
    }

    #[test]
    fn menu_cursor_is_bounded() {
        let mut ui = UIState::new();
        ui.menu_up();
        assert_eq!(ui.menu_cursor, 0);
        for _ in 0..10 {
            ui.menu_down(3);
        }
        assert_eq!(ui.menu_cursor, 2);
    }

    #[test]
    fn detail_scroll_is_bounded() {
        let mut ui = UIState::new();
        ui.scroll_detail_up();
        assert_eq!(ui.detail_scroll, 0);
        for _ in 0..10 {
            ui.scroll_detail_down(3);
        }
        assert_eq!(ui.detail_scroll, 3);
        ui.scroll_detail_down(0);
        assert_eq!(ui.detail_scroll, 0);
    }

    #[test]
    fn warning_window_saturates() {
        let mut ui = UIState::new();
        ui.notification_ms = u64::MAX;
        ui.show_warning("config ignored");
        let notification = ui.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert_eq!(notification.auto_dismiss_ms, Some(u64::MAX));

        ui.notification_ms = 1500;
        ui.show_warning("config ignored");
        assert_eq!(ui.notification.unwrap().auto_dismiss_ms, Some(3000));
    }

    #[test]
    fn errors_do_not_auto_dismiss() {
        let mut ui = UIState::new();
        ui.show_error("dataset missing");
        assert!(!ui.update_notification());
        assert!(ui.notification.is_some());

        ui.show_notification("gone", NotificationLevel::Info, Some(0));
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(ui.update_notification());
        assert!(ui.notification.is_none());
    }
}
