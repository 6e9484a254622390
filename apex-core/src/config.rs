//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! User-editable settings for the catalog browser, stored as TOML in the
//! platform config directory resolved by [`directories`](https://docs.rs/directories).
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Defaults written out on first run
//! - Async load on Tokio
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::catalog::filter::SortMode;
use crate::error::{AppError, AppResult};

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Dark,
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// External dataset to load instead of the bundled one.
    pub dataset_path: Option<PathBuf>,

    /// Sort mode applied at startup.
    pub default_sort: SortMode,

    pub theme: Theme,

    /// Tracing directive; `RUST_LOG` still takes precedence.
    pub log_level: String,

    /// Auto-dismiss window for info notifications.
    pub notification_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            default_sort: SortMode::InsertionOrder,
            theme: Theme::Default,
            log_level: "info".to_string(),
            notification_ms: 3000,
        }
    }
}

impl Config {
    /// Loads config from the app config dir, creating it with defaults when missing.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/ApexPredators/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> AppResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("org", "example", "ApexPredators").ok_or(AppError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).await.unwrap();
        assert_eq!(reloaded, cfg);
    }

    #[tokio::test]
    async fn partial_file_falls_back_to_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "default_sort = \"alphabetical\"\ndataset_path = \"/tmp/dino.json\"\n")
            .await
            .unwrap();

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg.default_sort, SortMode::Alphabetical);
        assert_eq!(cfg.dataset_path, Some(PathBuf::from("/tmp/dino.json")));
        assert_eq!(cfg.log_level, "info");
    }

    #[tokio::test]
    async fn unusable_log_level_still_loads_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "log_level = \"apex_core=loud\"\n")
            .await
            .unwrap();

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg.log_level, "apex_core=loud");

        let (directive, rejected) = crate::logging::Logger::directive_or_default(&cfg.log_level);
        assert_eq!(directive.to_string(), "info");
        assert!(rejected.is_some());
    }

    #[tokio::test]
    async fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "default_sort = 42").await.unwrap();

        assert!(matches!(
            Config::load_from(&path).await,
            Err(AppError::Config(_))
        ));
    }
}
