//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! Uses the simplified `Frame<'_>` API (no backend generic).
//! Each draw cycle renders the search bar, predator table and status bar,
//! then the active overlay and any notification on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Clear},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;
use crate::view::components::{
    confirm_delete::ConfirmDeleteOverlay, detail_view::DetailView, filter_menu::FilterMenu,
    help_overlay::HelpOverlay, notification_overlay::NotificationOverlay,
    predator_table::PredatorTable, search_overlay::SearchBar, status_bar::StatusBar,
};
use crate::view::theme;

pub struct View;

impl View {
    /// Draws the full UI for one frame; to be called in the `terminal.draw(|frame| ...)` callback.
    pub fn redraw(frame: &mut Frame<'_>, app: &AppState) {
        let full = frame.area();
        frame.render_widget(Block::default().style(theme::base_style(app.config.theme)), full);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(full);

        SearchBar::render(frame, app, chunks[0]);
        PredatorTable::render(frame, app, chunks[1]);
        StatusBar::render(frame, app, chunks[2]);

        if let Some(area) = Self::overlay_area(app.ui.overlay, full) {
            frame.render_widget(Clear, area);
            match app.ui.overlay {
                UIOverlay::Help => HelpOverlay::render(frame, app, area),
                UIOverlay::FilterMenu => FilterMenu::render(frame, app, area),
                UIOverlay::Detail => DetailView::render(frame, app, area),
                UIOverlay::ConfirmDelete => ConfirmDeleteOverlay::render(frame, app, area),
                UIOverlay::None => {}
            }
        }

        if let Some(notification) = &app.ui.notification {
            NotificationOverlay::render(frame, notification, Self::notification_area(full));
        }
    }

    /// Centered overlay rectangle per overlay kind.
    fn overlay_area(overlay: UIOverlay, full: Rect) -> Option<Rect> {
        match overlay {
            UIOverlay::None => None,
            UIOverlay::Help => Some(centered_rect(70, 80, full)),
            UIOverlay::FilterMenu => Some(centered_rect(50, 70, full)),
            UIOverlay::Detail => Some(centered_rect(90, 90, full)),
            UIOverlay::ConfirmDelete => {
                let area = centered_rect(50, 20, full);
                Some(Rect {
                    height: area.height.max(5).min(full.height),
                    ..area
                })
            }
        }
    }

    /// Bottom-right corner, above the status bar.
    fn notification_area(full: Rect) -> Rect {
        let width = (full.width / 3).max(30).min(full.width);
        let height = 5.min(full.height);
        Rect {
            x: full.x + full.width.saturating_sub(width),
            y: full.y + full.height.saturating_sub(height + 1),
            width,
            height,
        }
    }
}

/// Helper to create a centered rect using up certain percentage of the available rect `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
