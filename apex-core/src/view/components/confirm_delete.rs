//! src/view/components/confirm_delete.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{model::app_state::AppState, view::theme};

pub struct ConfirmDeleteOverlay;

impl ConfirmDeleteOverlay {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let name = app
            .pending_delete_predator()
            .map_or("this predator", |p| p.name.as_str());

        let text = vec![
            Line::from(format!("Are you sure you want to delete {name}?")),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y] Delete", Style::default().fg(theme::RED).bold()),
                Span::raw("   "),
                Span::styled("[n] Cancel", theme::hint_style()),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Delete Dinosaur ")
                    .title_style(Style::default().fg(theme::RED).bold())
                    .border_style(Style::default().fg(theme::RED))
                    .style(theme::base_style(app.config.theme)),
            );

        frame.render_widget(paragraph, area);
    }
}
