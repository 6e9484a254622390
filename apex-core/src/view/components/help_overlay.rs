//! src/view/components/help_overlay.rs
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{model::app_state::AppState, view::theme};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(theme::CYAN).add_modifier(Modifier::BOLD),
            ))
        };

        let lines = vec![
            section("Browsing:"),
            Line::from("  ↑↓ / j k      Move selection"),
            Line::from("  PgUp/PgDn     Page up/down"),
            Line::from("  Enter         Open detail page"),
            Line::from("  d / Delete    Delete selected predator"),
            Line::from(""),
            section("Search, sort and filter:"),
            Line::from("  /             Search by name (Enter keeps, Esc clears)"),
            Line::from("  s             Toggle sort (by id / A-Z)"),
            Line::from("  f             Open filter menu (type or movie)"),
            Line::from("  r             Reset filter to all"),
            Line::from(""),
            section("Detail page:"),
            Line::from("  ↑↓ / j k      Scroll"),
            Line::from("  d             Delete this predator"),
            Line::from("  Esc           Back to the list"),
            Line::from(""),
            section("Application:"),
            Line::from("  h / ? / F1    Toggle this help"),
            Line::from("  q / Ctrl+C    Quit"),
        ];

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(theme::CYAN))
                    .style(theme::base_style(app.config.theme)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, area);
    }
}
