//! Configuration for the starfield background.
//!
//! Settings are read once at startup from `config.toml` in the platform
//! config directory. Every key is optional; a missing file means defaults.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Initialization-time constants for the starfield.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of stars allocated at startup.
    pub star_count: usize,
    /// Pointer influence radius in surface pixels.
    pub influence_radius: f32,
    /// Lower bound of the shooting-star spawn interval.
    pub spawn_interval_min_ms: u64,
    /// Upper bound of the shooting-star spawn interval.
    pub spawn_interval_max_ms: u64,
    /// Chance that a spawn timer firing creates a shooting star.
    pub spawn_probability: f64,
    /// Shooting stars created at startup.
    pub initial_burst: usize,
    /// Target frames per second.
    pub frame_rate: u32,
    /// Surface pixels per terminal column.
    pub cell_width_px: f32,
    /// Surface pixels per terminal row.
    pub cell_height_px: f32,
    /// Overlay title.
    pub title: String,
    /// Overlay subtitle.
    pub subtitle: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: 3000,
            influence_radius: 150.0,
            spawn_interval_min_ms: 2000,
            spawn_interval_max_ms: 5000,
            spawn_probability: 0.25,
            initial_burst: 3,
            frame_rate: 60,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            title: "Space Law Explained".to_string(),
            subtitle: "Seu caminho do saber pelas estrelas".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "starfield").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_interval_min_ms > self.spawn_interval_max_ms {
            return Err(ConfigError::Invalid {
                key: "spawn_interval_min_ms",
                reason: format!(
                    "{} is greater than spawn_interval_max_ms ({})",
                    self.spawn_interval_min_ms, self.spawn_interval_max_ms
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::Invalid {
                key: "spawn_probability",
                reason: format!("{} is outside 0.0-1.0", self.spawn_probability),
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid {
                key: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.influence_radius > 0.0) {
            return Err(ConfigError::Invalid {
                key: "influence_radius",
                reason: "must be positive".to_string(),
            });
        }
        for (key, value) in [
            ("cell_width_px", self.cell_width_px),
            ("cell_height_px", self.cell_height_px),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}
