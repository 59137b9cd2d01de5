// Configuration loading and validation (scorebook.toml).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use scorebook_core::dataset::Dataset;
use scorebook_core::model::Game;
use scorebook_core::stats::games::recent_games;
use scorebook_core::stats::trend::{recent_batting_trend, TrendPoint};
use serde::Deserialize;
use thiserror::Error;

/// Blob key the dataset is stored under unless configured otherwise.
pub const DEFAULT_APP_KEY: &str = "baseball-ops-data";

const DB_FILE_NAME: &str = "scorebook.db";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file path. Defaults to the platform data directory.
    pub db_path: String,
    /// Key of the dataset blob inside the store.
    pub app_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            app_key: DEFAULT_APP_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Default number of games in a batting trend.
    pub trend_window: usize,
    /// Default length of the recent-games list.
    pub recent_games: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trend_window: 5,
            recent_games: 5,
        }
    }
}

impl StatsConfig {
    /// `player_name`'s batting trend over the configured window.
    pub fn batting_trend(&self, data: &Dataset, player_name: &str) -> Vec<TrendPoint> {
        recent_batting_trend(
            &data.plate_appearances,
            &data.games,
            player_name,
            self.trend_window,
        )
    }

    /// The configured number of most recent games, newest first.
    pub fn recent_games<'a>(&self, data: &'a Dataset) -> Vec<&'a Game> {
        recent_games(&data.games, self.recent_games)
    }
}

/// `<data dir>/scorebook.db`, or a file in the working directory when the
/// platform has no home directory.
fn default_db_path() -> String {
    match ProjectDirs::from("", "", "scorebook") {
        Some(dirs) => dirs.data_dir().join(DB_FILE_NAME).display().to_string(),
        None => DB_FILE_NAME.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load and validate a config file that must exist.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise return the defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_file(path)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.storage.app_key.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "storage.app_key".into(),
            message: "must not be empty".into(),
        });
    }

    let positive: &[(&str, usize)] = &[
        ("stats.trend_window", config.stats.trend_window),
        ("stats.recent_games", config.stats.recent_games),
    ];
    for (name, val) in positive {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be greater than 0".into(),
            });
        }
    }

    Ok(())
}
