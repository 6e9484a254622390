//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants for the Catppuccin Mocha theme, plus the habitat badge
//! colors. Colors are from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Style};
use tracing::debug;

use crate::catalog::predator::HabitatType;
use crate::config::Theme;

pub fn init_theme(theme: Theme) {
    debug!("Initializing {:?} theme, background {:?}", theme, background(theme));
}

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CRUST: Color = Color::Rgb(17, 17, 27); // Crust
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

// habitat badges
pub const LAND_BROWN: Color = Color::Rgb(153, 102, 51);
pub const AIR_TEAL: Color = Color::Rgb(48, 176, 199);
pub const SEA_BLUE: Color = Color::Rgb(0, 122, 255);
pub const ALL_BLACK: Color = Color::Rgb(0, 0, 0);

#[must_use]
pub const fn background(theme: Theme) -> Color {
    match theme {
        Theme::Default => BACKGROUND,
        Theme::Dark => CRUST,
    }
}

#[must_use]
pub const fn habitat_color(habitat: HabitatType) -> Color {
    match habitat {
        HabitatType::Land => LAND_BROWN,
        HabitatType::Air => AIR_TEAL,
        HabitatType::Sea => SEA_BLUE,
        HabitatType::All => ALL_BLACK,
    }
}

/// White-on-color badge for a habitat.
#[must_use]
pub fn habitat_badge_style(habitat: HabitatType) -> Style {
    Style::default().bg(habitat_color(habitat)).fg(Color::White)
}

pub fn base_style(theme: Theme) -> Style {
    Style::default().bg(background(theme)).fg(FOREGROUND)
}

pub fn border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn highlight_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}

pub fn hint_style() -> Style {
    Style::default().fg(COMMENT)
}
