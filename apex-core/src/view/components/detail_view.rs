//! src/view/components/detail_view.rs
//! ============================================================================
//! # DetailView: Single Predator Page
//!
//! Header with name, habitat badge and image key, a world map zoomed around
//! the predator's last known location, then a scrollable body listing the
//! movies it appears in, its movie moments and the "read more" link.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph, Wrap,
        canvas::{Canvas, Map, MapResolution},
    },
};

use crate::{
    catalog::predator::{Coordinate, Predator},
    model::app_state::AppState,
    view::{icons, theme},
};

/// Half-width of the map window in degrees of longitude.
const MAP_SPAN_LON: f64 = 40.0;
/// Half-height of the map window in degrees of latitude.
const MAP_SPAN_LAT: f64 = 20.0;

pub struct DetailView;

impl DetailView {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(" ↑↓ scroll  d delete  Esc back ").centered())
            .border_style(theme::border_style())
            .style(theme::base_style(app.config.theme));

        let Some(predator) = app.detail_predator() else {
            frame.render_widget(Paragraph::new("Nothing selected.").block(block), area);
            return;
        };

        let block = block.title(format!(" {} ", predator.name));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Percentage(45),
                Constraint::Min(3),
            ])
            .split(inner);

        Self::render_header(frame, predator, chunks[0]);
        Self::render_map(frame, predator, chunks[1]);

        let body = Paragraph::new(Self::body_lines(predator))
            .wrap(Wrap { trim: false })
            .scroll((app.ui.detail_scroll, 0));
        frame.render_widget(body, chunks[2]);
    }

    fn render_header(frame: &mut Frame<'_>, predator: &Predator, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(predator.name.clone(), Style::default().fg(theme::YELLOW).bold()),
                Span::raw("  "),
                Span::styled(
                    format!(" {} {} ", icons::glyph(predator.habitat.icon()), predator.habitat.label()),
                    theme::habitat_badge_style(predator.habitat),
                ),
            ]),
            Line::from(Span::styled(
                format!("image: {}", predator.image_key()),
                theme::hint_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_map(frame: &mut Frame<'_>, predator: &Predator, area: Rect) {
        let location = predator.location();
        let (x_bounds, y_bounds) = map_bounds(location);
        let label = format!(
            "{} {:.2}, {:.2}",
            icons::MAP_MARKER,
            location.latitude,
            location.longitude
        );

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Current Location ")
                    .border_style(Style::default().fg(theme::COMMENT)),
            )
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: theme::GREEN,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                ctx.print(
                    location.longitude,
                    location.latitude,
                    Span::styled(label.clone(), Style::default().fg(theme::RED).bold()),
                );
            });

        frame.render_widget(canvas, area);
    }

    /// Largest useful scroll offset: the last body line at the top.
    #[must_use]
    pub fn max_scroll(predator: &Predator) -> u16 {
        let last = Self::body_lines(predator).len().saturating_sub(1);
        u16::try_from(last).unwrap_or(u16::MAX)
    }

    fn body_lines(predator: &Predator) -> Vec<Line<'static>> {
        let heading = |text: &'static str| {
            Line::from(Span::styled(text, Style::default().fg(theme::CYAN).bold()))
        };

        let mut lines = vec![heading("Appears in:")];
        if predator.movies.is_empty() {
            lines.push(Line::from(Span::styled("  (no movies)", theme::hint_style())));
        }
        for movie in &predator.movies {
            lines.push(Line::from(format!("  {} {movie}", icons::BULLET)));
        }

        lines.push(Line::from(""));
        lines.push(heading("Movie Moments"));
        if predator.movie_scenes.is_empty() {
            lines.push(Line::from(Span::styled("  (none recorded)", theme::hint_style())));
        }
        for scene in &predator.movie_scenes {
            lines.push(Line::from(Span::styled(
                format!("  {}", scene.movie),
                Style::default().fg(theme::PURPLE).bold(),
            )));
            lines.push(Line::from(format!("    {}", scene.scene_description)));
        }

        lines.push(Line::from(""));
        lines.push(heading("Read More:"));
        lines.push(Line::from(Span::styled(
            format!("  {} {}", icons::LINK_ICON, predator.link),
            Style::default().fg(theme::CYAN).underlined(),
        )));

        lines
    }
}

/// Map window centred on `location`, clamped to the world bounds.
#[must_use]
pub fn map_bounds(location: Coordinate) -> ([f64; 2], [f64; 2]) {
    let clamp = |center: f64, span: f64, limit: f64| {
        let lo = (center - span).max(-limit);
        let hi = (center + span).min(limit);
        [lo, hi]
    };
    (
        clamp(location.longitude, MAP_SPAN_LON, 180.0),
        clamp(location.latitude, MAP_SPAN_LAT, 90.0),
    )
}
