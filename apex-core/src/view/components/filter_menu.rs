//! src/view/components/filter_menu.rs
//! ============================================================================
//! # FilterMenu: Type / Movie Picker
//!
//! Lists every filter option under a "Type" and a "Movie" heading. The active
//! option carries a check mark and the cursor row is highlighted. Heading rows
//! are not selectable, so the cursor is translated to a list row before
//! rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    catalog::filter::FilterOption,
    model::app_state::AppState,
    view::{icons, theme},
};

pub struct FilterMenu;

impl FilterMenu {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let active = &app.query().filter;
        let mut items: Vec<ListItem> = Vec::with_capacity(app.menu_options.len() + 2);
        let mut last_section = None;

        for option in &app.menu_options {
            let section = Self::section(option);
            if last_section != Some(section) {
                items.push(ListItem::new(Line::from(Span::styled(
                    section,
                    Style::default().fg(theme::YELLOW).bold(),
                ))));
                last_section = Some(section);
            }

            let mark = if option == active { icons::ACTIVE_MARK } else { " " };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!(" {mark} "), Style::default().fg(theme::GREEN)),
                Span::raw(format!("{} ", icons::glyph(option.icon()))),
                Span::raw(option.display_name().to_string()),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Filter ")
                    .title_bottom(Line::from(" ↑↓ move  Enter apply  Esc close ").centered())
                    .border_style(theme::border_style())
                    .style(theme::base_style(app.config.theme)),
            )
            .highlight_style(theme::highlight_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut state = ListState::default()
            .with_selected(Self::row_for_cursor(&app.menu_options, app.ui.menu_cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn section(option: &FilterOption) -> &'static str {
        match option {
            FilterOption::ByType(_) => "Type",
            FilterOption::ByMovie(_) => "Movie",
        }
    }

    /// List row of the option at `cursor`, counting the heading rows above it.
    #[must_use]
    pub fn row_for_cursor(options: &[FilterOption], cursor: usize) -> Option<usize> {
        if cursor >= options.len() {
            return None;
        }
        let mut headings = 0;
        let mut last_section = None;
        for option in &options[..=cursor] {
            let section = Self::section(option);
            if last_section != Some(section) {
                headings += 1;
                last_section = Some(section);
            }
        }
        Some(cursor + headings)
    }
}
