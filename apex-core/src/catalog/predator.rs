//! src/catalog/predator.rs
//! ============================================================================
//! # Predator: Catalog Record Types
//!
//! One immutable record per apex predator, plus the closed habitat
//! enumeration. Records are only ever built by the loader; everything here is
//! read-only once the catalog is populated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier from the source dataset.
pub type PredatorId = i64;

/// Habitat of a predator. `All` is a query wildcard and never a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitatType {
    All,
    Land,
    Air,
    Sea,
}

impl HabitatType {
    /// Picker order: wildcard first, then the real habitats.
    pub const ALL_CASES: [Self; 4] = [Self::All, Self::Land, Self::Air, Self::Sea];

    #[must_use]
    pub const fn raw_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Land => "land",
            Self::Air => "air",
            Self::Sea => "sea",
        }
    }

    /// Capitalised raw value, used for badges and menu labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Land => "Land",
            Self::Air => "Air",
            Self::Sea => "Sea",
        }
    }

    /// Opaque icon key for the presentation layer.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "square.stack.3d.up.fill",
            Self::Land => "leaf.fill",
            Self::Air => "wind",
            Self::Sea => "drop.fill",
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for HabitatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

/// A geographic point handed to the map renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A narrative moment from one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieScene {
    pub id: i64,
    pub movie: String,
    pub scene_description: String,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Predator {
    pub id: PredatorId,
    pub name: String,
    pub habitat: HabitatType,
    pub latitude: f64,
    pub longitude: f64,
    pub movies: Vec<String>,
    pub movie_scenes: Vec<MovieScene>,
    pub link: String,
}

impl Predator {
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Asset key derived from the display name: lower-cased, spaces stripped.
    #[must_use]
    pub fn image_key(&self) -> String {
        self.name.to_lowercase().replace(' ', "")
    }

    #[must_use]
    pub fn appears_in(&self, movie: &str) -> bool {
        self.movies.iter().any(|m| m == movie)
    }

    /// Case-insensitive substring match against the name.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}
