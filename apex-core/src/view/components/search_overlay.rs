//! src/view/components/search_overlay.rs
//! ============================================================================
//! # SearchBar: Live Search Input
//!
//! Always visible above the table. While in search mode it shows a cursor and
//! a highlighted border; the match count reflects the full pipeline result.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{model::app_state::AppState, view::theme};

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let searching = app.ui.is_searching();
        let term = &app.query().search;

        let border = if searching {
            Style::default().fg(theme::YELLOW)
        } else {
            Style::default().fg(theme::COMMENT)
        };

        let mut spans = vec![Span::styled("Search: ", Style::default().fg(theme::CYAN))];
        if term.is_empty() && !searching {
            spans.push(Span::styled("press / to search by name", theme::hint_style()));
        } else {
            spans.push(Span::styled(term.clone(), Style::default().fg(theme::FOREGROUND)));
        }
        if searching {
            spans.push(Span::styled("▏", Style::default().fg(theme::YELLOW)));
        }

        let matches = format!(" {} matches ", app.visible().len());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .title_bottom(Line::from(matches).right_aligned())
            .border_style(border)
            .style(theme::base_style(app.config.theme));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
