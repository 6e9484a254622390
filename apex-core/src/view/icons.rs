//! src/view/icons.rs
//! ============================================================================
//! # Icons
//!
//! The catalog hands out opaque symbol keys for habitats and movies. This
//! module turns them into glyphs a terminal can draw.

pub const MAP_MARKER: &str = "✖";
pub const BULLET: &str = "•";
pub const ACTIVE_MARK: &str = "✓";
pub const LINK_ICON: &str = "🔗";

/// Glyph for an icon key; unknown keys fall back to a film strip.
#[must_use]
pub fn glyph(key: &str) -> &'static str {
    match key {
        "square.stack.3d.up.fill" => "▦",
        "leaf.fill" => "🌿",
        "wind" => "🌬",
        "drop.fill" => "💧",
        "sparkles" => "✨",
        "map.fill" => "🗺",
        "diamond.fill" => "◆",
        "globe.americas.fill" => "🌎",
        "flame.fill" => "🔥",
        "crown.fill" => "👑",
        _ => "🎞",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::FilterOption;
    use crate::catalog::predator::HabitatType;

    #[test]
    fn habitat_icons_have_their_own_glyphs() {
        for habitat in HabitatType::ALL_CASES {
            assert_ne!(glyph(habitat.icon()), glyph("film.fill"), "{habitat}");
        }
    }

    #[test]
    fn unknown_movie_uses_fallback() {
        let option = FilterOption::ByMovie("Jurassic World: Rebirth".to_string());
        assert_eq!(glyph(option.icon()), "🎞");
    }
}
