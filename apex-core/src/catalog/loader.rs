//! src/catalog/loader.rs
//! ============================================================================
//! # Loader: Dataset Decoding and Validation
//!
//! Decodes the predator dataset (bundled into the binary, or read once from a
//! file) and validates it as a whole. Storage uses snake_case field names and
//! stores the habitat under `type`; that naming never leaves this module.
//!
//! Loading is all-or-nothing: any malformed or invalid record fails the whole
//! load and no records are returned.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tokio::fs as TokioFs;
use tracing::{debug, info, warn};

use crate::catalog::predator::{Coordinate, HabitatType, MovieScene, Predator, PredatorId};

/// Bundle resource name of the built-in dataset.
pub const BUNDLED_DATASET_NAME: &str = "jpapexpredators.json";

const BUNDLED_DATASET: &str = include_str!("../../data/jpapexpredators.json");

/// Why a dataset could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not valid JSON, a required field is missing, or a field has the wrong type.
    #[error("Malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Record {id} has an empty name")]
    EmptyName { id: PredatorId },

    #[error("Record {id} uses the wildcard habitat 'all'")]
    WildcardHabitat { id: PredatorId },

    #[error("Record {id} has coordinates out of range ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        id: PredatorId,
        latitude: f64,
        longitude: f64,
    },

    #[error("Duplicate record id {0}")]
    DuplicateId(PredatorId),
}

#[derive(Debug, Deserialize)]
struct RawScene {
    id: i64,
    movie: String,
    scene_description: String,
}

#[derive(Debug, Deserialize)]
struct RawPredator {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    habitat: HabitatType,
    latitude: f64,
    longitude: f64,
    movies: Vec<String>,
    movie_scenes: Vec<RawScene>,
    link: String,
}

impl From<RawPredator> for Predator {
    fn from(raw: RawPredator) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            habitat: raw.habitat,
            latitude: raw.latitude,
            longitude: raw.longitude,
            movies: raw.movies,
            movie_scenes: raw
                .movie_scenes
                .into_iter()
                .map(|scene| MovieScene {
                    id: scene.id,
                    movie: scene.movie,
                    scene_description: scene.scene_description,
                })
                .collect(),
            link: raw.link,
        }
    }
}

/// Decodes the dataset compiled into the binary.
pub fn load() -> Result<Vec<Predator>, LoadError> {
    debug!("Decoding bundled dataset {}", BUNDLED_DATASET_NAME);
    parse(BUNDLED_DATASET)
}

/// Reads and decodes a dataset file. This is the only suspension point of a load.
pub async fn load_file(path: &Path) -> Result<Vec<Predator>, LoadError> {
    info!("Loading dataset from {}", path.display());

    let text = match TokioFs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse(&text)
}

/// Decodes and validates dataset text.
pub fn parse(text: &str) -> Result<Vec<Predator>, LoadError> {
    let raw: Vec<RawPredator> = serde_json::from_str(text)?;
    validate(&raw)?;

    let records: Vec<Predator> = raw.into_iter().map(Predator::from).collect();
    info!("Decoded {} predator records", records.len());
    Ok(records)
}

fn validate(raw: &[RawPredator]) -> Result<(), LoadError> {
    let mut seen: HashSet<PredatorId> = HashSet::with_capacity(raw.len());

    for record in raw {
        if record.name.is_empty() {
            return Err(LoadError::EmptyName { id: record.id });
        }

        if record.habitat.is_wildcard() {
            warn!("Rejecting record {} with wildcard habitat", record.id);
            return Err(LoadError::WildcardHabitat { id: record.id });
        }

        let location = Coordinate {
            latitude: record.latitude,
            longitude: record.longitude,
        };
        if !location.is_valid() {
            return Err(LoadError::CoordinateOutOfRange {
                id: record.id,
                latitude: record.latitude,
                longitude: record.longitude,
            });
        }

        if !seen.insert(record.id) {
            return Err(LoadError::DuplicateId(record.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ONE_RECORD: &str = r#"[
        {
            "id": 1,
            "name": "Tyrannosaurus Rex",
            "type": "land",
            "latitude": 9.8,
            "longitude": -84.7,
            "movies": ["Jurassic Park"],
            "movie_scenes": [
                {"id": 1, "movie": "Jurassic Park", "scene_description": "Breaks out of the paddock."}
            ],
            "link": "https://example.org/trex"
        }
    ]"#;

    #[test]
    fn storage_names_map_to_record_fields() {
        let records = parse(ONE_RECORD).unwrap();
        assert_eq!(records.len(), 1);
        let rex = &records[0];
        assert_eq!(rex.habitat, HabitatType::Land);
        assert_eq!(rex.movie_scenes.len(), 1);
        assert_eq!(
            rex.movie_scenes[0].scene_description,
            "Breaks out of the paddock."
        );
    }

    #[test]
    fn missing_name_fails_whole_load() {
        let text = r#"[
            {"id": 1, "name": "Rex", "type": "land", "latitude": 0, "longitude": 0,
             "movies": [], "movie_scenes": [], "link": ""},
            {"id": 2, "type": "sea", "latitude": 0, "longitude": 0,
             "movies": [], "movie_scenes": [], "link": ""}
        ]"#;
        let err = parse(text).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let text = ONE_RECORD.replace("\"latitude\": 9.8", "\"latitude\": \"north\"");
        assert!(matches!(parse(&text), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn wildcard_habitat_is_rejected() {
        let text = ONE_RECORD.replace("\"land\"", "\"all\"");
        assert!(matches!(
            parse(&text),
            Err(LoadError::WildcardHabitat { id: 1 })
        ));
    }

    #[test]
    fn unknown_habitat_is_malformed() {
        let text = ONE_RECORD.replace("\"land\"", "\"space\"");
        assert!(matches!(parse(&text), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"[
            {"id": 7, "name": "A", "type": "air", "latitude": 0, "longitude": 0,
             "movies": [], "movie_scenes": [], "link": ""},
            {"id": 7, "name": "B", "type": "sea", "latitude": 0, "longitude": 0,
             "movies": [], "movie_scenes": [], "link": ""}
        ]"#;
        assert!(matches!(parse(text), Err(LoadError::DuplicateId(7))));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let text = ONE_RECORD.replace("-84.7", "-200.0");
        assert!(matches!(
            parse(&text),
            Err(LoadError::CoordinateOutOfRange { id: 1, .. })
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        let text = ONE_RECORD.replace("Tyrannosaurus Rex", "");
        assert!(matches!(parse(&text), Err(LoadError::EmptyName { id: 1 })));
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let text = ONE_RECORD.replace("Tyrannosaurus Rex", "  ");
        let records = parse(&text).unwrap();
        assert_eq!(records[0].name, "  ");
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let records = load().unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|p| !p.habitat.is_wildcard()));
        assert!(records.iter().all(|p| p.location().is_valid()));
    }

    #[tokio::test]
    async fn load_file_reads_dataset_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_RECORD.as_bytes()).unwrap();

        let records = load_file(file.path()).await.unwrap();
        assert_eq!(records[0].name, "Tyrannosaurus Rex");
    }

    #[tokio::test]
    async fn load_file_reports_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            load_file(&missing).await,
            Err(LoadError::NotFound(_))
        ));
    }
}
