//! src/catalog/filter.rs
//! ============================================================================
//! # FilterOption / SortMode: Query Criteria
//!
//! The closed set of ways a user can narrow and order the catalog. Exactly
//! one `FilterOption` is active at a time; selecting another replaces it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::predator::{HabitatType, Predator};

/// Active filter criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOption {
    ByType(HabitatType),
    ByMovie(String),
}

impl Default for FilterOption {
    fn default() -> Self {
        Self::ByType(HabitatType::All)
    }
}

impl FilterOption {
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::ByType(habitat) => format!("type_{}", habitat.raw_value()),
            Self::ByMovie(movie) => format!("movie_{movie}"),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::ByType(habitat) => habitat.label(),
            Self::ByMovie(movie) => movie,
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::ByType(habitat) => habitat.icon(),
            Self::ByMovie(movie) => movie_icon(movie),
        }
    }

    /// True for the no-op `ByType(All)` criterion.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::ByType(HabitatType::All))
    }

    #[must_use]
    pub fn matches(&self, predator: &Predator) -> bool {
        match self {
            Self::ByType(HabitatType::All) => true,
            Self::ByType(habitat) => predator.habitat == *habitat,
            Self::ByMovie(movie) => predator.appears_in(movie),
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByType(habitat) => write!(f, "Type: {}", habitat.label()),
            Self::ByMovie(movie) => write!(f, "Movie: {movie}"),
        }
    }
}

fn movie_icon(movie: &str) -> &'static str {
    match movie {
        "Jurassic Park" => "sparkles",
        "The Lost World: Jurassic Park" => "map.fill",
        "Jurassic Park III" => "diamond.fill",
        "Jurassic World" => "globe.americas.fill",
        "Jurassic World: Fallen Kingdom" => "flame.fill",
        "Jurassic World: Dominion" => "crown.fill",
        _ => "film.fill",
    }
}

/// Every selectable option in picker order: habitats first, then movie titles.
#[must_use]
pub fn menu_options(movies: &[String]) -> Vec<FilterOption> {
    HabitatType::ALL_CASES
        .into_iter()
        .map(FilterOption::ByType)
        .chain(movies.iter().cloned().map(FilterOption::ByMovie))
        .collect()
}

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending `id`, i.e. dataset order.
    #[default]
    InsertionOrder,
    /// Byte-wise by `name`, ties broken by `id`.
    Alphabetical,
}

impl SortMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::InsertionOrder => Self::Alphabetical,
            Self::Alphabetical => Self::InsertionOrder,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsertionOrder => "by id",
            Self::Alphabetical => "A-Z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_wildcard() {
        let option = FilterOption::default();
        assert!(option.is_wildcard());
        assert_eq!(option.id(), "type_all");
        assert_eq!(option.display_name(), "All");
        assert_eq!(option.icon(), "square.stack.3d.up.fill");
    }

    #[test]
    fn movie_options_use_title_and_icon_table() {
        let option = FilterOption::ByMovie("Jurassic World: Dominion".to_string());
        assert_eq!(option.id(), "movie_Jurassic World: Dominion");
        assert_eq!(option.display_name(), "Jurassic World: Dominion");
        assert_eq!(option.icon(), "crown.fill");

        let unknown = FilterOption::ByMovie("Camp Cretaceous".to_string());
        assert_eq!(unknown.icon(), "film.fill");
    }

    #[test]
    fn menu_lists_habitats_then_movies() {
        let movies = vec!["A".to_string(), "B".to_string()];
        let options = menu_options(&movies);
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], FilterOption::ByType(HabitatType::All));
        assert_eq!(options[3], FilterOption::ByType(HabitatType::Sea));
        assert_eq!(options[4], FilterOption::ByMovie("A".to_string()));
    }

    #[test]
    fn sort_mode_toggles_back_and_forth() {
        let mode = SortMode::default();
        assert_eq!(mode, SortMode::InsertionOrder);
        assert_eq!(mode.toggled(), SortMode::Alphabetical);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}
