//! src/view/components/status_bar.rs
//!
//! One line at the bottom: the last error or status message on the left, the
//! active sort, filter and `visible/total` counts on the right.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::{
    model::{app_state::AppState, ui_state::UIMode},
    view::theme,
};

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let base = theme::base_style(app.config.theme);

        let mode_str = match app.ui.mode {
            UIMode::Browse => "Browse",
            UIMode::Search => "Search",
        };

        let left = match (&app.last_error, &app.last_status) {
            (Some(err), _) => Line::from(vec![
                Span::styled(format!(" {mode_str} "), Style::default().fg(theme::PURPLE).bold()),
                Span::styled(format!("Error: {err}"), Style::default().fg(theme::RED)),
            ]),
            (None, Some(status)) => Line::from(vec![
                Span::styled(format!(" {mode_str} "), Style::default().fg(theme::PURPLE).bold()),
                Span::styled(status.clone(), Style::default().fg(theme::GREEN)),
            ]),
            (None, None) => Line::from(vec![
                Span::styled(format!(" {mode_str} "), Style::default().fg(theme::PURPLE).bold()),
                Span::styled("h for help", theme::hint_style()),
            ]),
        };

        let query = app.query();
        let right_text = format!(
            "Sort: {} | {} | {}/{} ",
            query.sort.label(),
            query.filter,
            app.visible().len(),
            app.store.len()
        );

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left)
            .style(base)
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(base.fg(theme::CYAN))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}
