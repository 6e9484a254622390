//! src/view/components/predator_table.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState, Wrap},
};

use crate::{
    catalog::predator::Predator,
    model::app_state::AppState,
    view::{icons, theme},
};

pub struct PredatorTable;

impl PredatorTable {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let title = format!(
            " Apex Predators ({}/{}) ",
            app.visible().len(),
            app.store.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(theme::PURPLE).bold())
            .border_style(Style::default().fg(theme::COMMENT))
            .style(theme::base_style(app.config.theme));

        if !app.store.is_loaded() || app.visible().is_empty() {
            let message = if app.store.is_loaded() {
                "No predators match the current search and filter."
            } else {
                "Catalog unavailable. Check the log for details."
            };
            let empty = Paragraph::new(message)
                .style(theme::hint_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec!["ID", "Name", "Habitat", "Movies", "Image"])
            .style(Style::default().fg(theme::YELLOW).bold())
            .bottom_margin(1);

        let rows: Vec<Row> = app.visible().iter().map(Self::row).collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Fill(1),
        ];

        let mut table_state = TableState::default().with_selected(app.ui.selected);

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme::highlight_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn row(predator: &Predator) -> Row<'static> {
        let badge = Span::styled(
            format!(" {} {} ", icons::glyph(predator.habitat.icon()), predator.habitat.label()),
            theme::habitat_badge_style(predator.habitat),
        );

        Row::new(vec![
            Cell::from(predator.id.to_string()),
            Cell::from(predator.name.clone()),
            Cell::from(Line::from(badge)),
            Cell::from(predator.movies.len().to_string()),
            Cell::from(predator.image_key()).style(theme::hint_style()),
        ])
    }
}
