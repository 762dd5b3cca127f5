use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::theme::Theme;

pub const CONFIG_ENV: &str = "STATPAIR_CONFIG";
pub const CONFIG_FILE: &str = "statpair.json";

const MAX_DECIMALS: usize = 10;
const MIN_FIELDS: usize = 2;
const FIELD_LIMIT: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Display preferences. Never holds submitted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    /// Decimal places for every number in the result report.
    pub decimals: usize,
    /// Decimal places for the regression equation in the plot legend.
    pub legend_decimals: usize,
    /// Initial row count in individual-field mode.
    pub default_field_count: usize,
    pub max_field_count: usize,
    pub plot_width: f32,
    pub plot_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            decimals: 4,
            legend_decimals: 2,
            default_field_count: 5,
            max_field_count: 50,
            plot_width: 700.0,
            plot_height: 500.0,
        }
    }
}

impl AppConfig {
    /// Config path: `$STATPAIR_CONFIG` if set, else `statpair.json` in the
    /// working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Read a config file. A missing file is not an error and yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config.sanitized())
    }

    /// Load from [`Self::default_path`], logging and falling back to
    /// defaults on any failure.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(?path, ?config, "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Clamp values into ranges the UI can work with.
    pub fn sanitized(mut self) -> Self {
        self.decimals = self.decimals.min(MAX_DECIMALS);
        self.legend_decimals = self.legend_decimals.min(MAX_DECIMALS);
        self.max_field_count = self.max_field_count.clamp(MIN_FIELDS, FIELD_LIMIT);
        self.default_field_count = self
            .default_field_count
            .clamp(MIN_FIELDS, self.max_field_count);
        if !(self.plot_width.is_finite() && self.plot_width >= 200.0) {
            self.plot_width = 700.0;
        }
        if !(self.plot_height.is_finite() && self.plot_height >= 150.0) {
            self.plot_height = 500.0;
        }
        self
    }

    pub fn min_field_count(&self) -> usize {
        MIN_FIELDS
    }
}
