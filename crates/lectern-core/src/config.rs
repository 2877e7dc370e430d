use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    APP_DIR_NAME, DEFAULT_ENDPOINT_URL, DEFAULT_MIN_SCALE, DEFAULT_IDLE_TIMEOUT_SECS,
    DEFAULT_ZOOM_IN_STEP, DEFAULT_ZOOM_OUT_STEP,
};
use crate::error::{LecternError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LecternConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL the translate/analyze requests are POSTed to.
    pub url: String,
    /// Limit on connecting and on the silence between two reads of the body.
    /// The total duration of a streamed answer is not bounded.
    #[serde(alias = "timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
        }
    }
}

impl EndpointConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub initial_scale: f32,
    pub min_scale: f32,
    pub zoom_in_step: f32,
    pub zoom_out_step: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            zoom_in_step: DEFAULT_ZOOM_IN_STEP,
            zoom_out_step: DEFAULT_ZOOM_OUT_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Silently reopen the last document on startup.
    pub reopen_last: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { reopen_last: true }
    }
}

impl LecternConfig {
    /// `<platform config dir>/lectern/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
            .ok_or(LecternError::NoPlatformDir)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `path` if given, else the default location; fall back to defaults
    /// when the default file does not exist. An explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            Ok(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| LecternError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LecternError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
