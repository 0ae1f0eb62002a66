use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use uuid::Uuid;

use tremor_input::DEFAULT_DRAG_THRESHOLD;
use tremor_link::{SERVICE_UUID, TASK_CHARACTERISTIC_UUID};
use tremor_recorder::DEFAULT_STORE_DIR;

/// Intermediate representation for deserializing the session TOML file.
///
/// Every field is optional, missing ones fall back to the built-in
/// defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub drag_threshold: Option<f64>,
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Service the peripheral advertises.
    #[serde(default)]
    pub service: Option<Uuid>,
    /// Characteristic the command bytes go to.
    #[serde(default)]
    pub characteristic: Option<Uuid>,
}

/// Fully resolved session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub drag_threshold: f64,
    pub storage_dir: PathBuf,
    pub service: Uuid,
    pub characteristic: Uuid,
}

impl Default for SessionConfig {
    fn default() -> Self {
        ConfigFile::default().resolve()
    }
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<SessionConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Reading configuration from {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&text)?;
        if let Some(threshold) = file.drag_threshold
            && threshold <= 0.0
        {
            bail!("drag_threshold must be positive, got {threshold}");
        }
        Ok(file.resolve())
    }

    pub fn resolve(self) -> SessionConfig {
        SessionConfig {
            drag_threshold: self.drag_threshold.unwrap_or(DEFAULT_DRAG_THRESHOLD),
            storage_dir: self
                .storage_dir
                .unwrap_or_else(|| DEFAULT_STORE_DIR.into()),
            service: self.service.unwrap_or(SERVICE_UUID),
            characteristic: self.characteristic.unwrap_or(TASK_CHARACTERISTIC_UUID),
        }
    }
}
