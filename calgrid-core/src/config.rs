//! Global calgrid configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SLOT_HEIGHT, DEFAULT_STORE_PATH, DEFAULT_STORE_SLOT, DEFAULT_WIDTH_PERCENT,
    DEFAULT_Z_BASE, DEFAULT_Z_STEP,
};
use crate::error::{CalGridError, CalGridResult};
use crate::geometry::GeometryConfig;
use crate::store::FileStore;
use crate::view::ViewKind;

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_store_slot() -> String {
    DEFAULT_STORE_SLOT.to_string()
}

fn default_view() -> String {
    ViewKind::default().to_string()
}

fn default_slot_height() -> f64 {
    DEFAULT_SLOT_HEIGHT
}

fn default_width_percent() -> f64 {
    DEFAULT_WIDTH_PERCENT
}

fn default_z_base() -> i64 {
    DEFAULT_Z_BASE
}

fn default_z_step() -> i64 {
    DEFAULT_Z_STEP
}

/// Configuration at ~/.config/calgrid/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalGridConfig {
    /// File holding the event store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Slot of the store file the event list is kept under
    #[serde(default = "default_store_slot")]
    pub store_slot: String,

    /// View shown when no view is asked for
    #[serde(default = "default_view")]
    pub default_view: String,

    #[serde(default = "default_slot_height")]
    pub slot_height: f64,

    #[serde(default = "default_width_percent")]
    pub width_percent: f64,

    #[serde(default = "default_z_base")]
    pub z_base: i64,

    #[serde(default = "default_z_step")]
    pub z_step: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for CalGridConfig {
    fn default() -> Self {
        CalGridConfig {
            store_path: default_store_path(),
            store_slot: default_store_slot(),
            default_view: default_view(),
            slot_height: DEFAULT_SLOT_HEIGHT,
            width_percent: DEFAULT_WIDTH_PERCENT,
            z_base: DEFAULT_Z_BASE,
            z_step: DEFAULT_Z_STEP,
            log_level: None,
        }
    }
}

impl CalGridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// none exists.
    pub fn load() -> CalGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        let config: CalGridConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))?;

        config.view()?;
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Where your events are stored:
# store_path = \"{}\"

# Key of the store file the event list lives under:
# store_slot = \"{}\"

# View shown by default (month, week or day):
# default_view = \"month\"

# Day and week view layout:
# slot_height = {}
# width_percent = {}
# z_base = {}
# z_step = {}

# Log level (error, warn, info, debug, trace):
# log_level = \"warn\"
",
            DEFAULT_STORE_PATH,
            DEFAULT_STORE_SLOT,
            DEFAULT_SLOT_HEIGHT,
            DEFAULT_WIDTH_PERCENT,
            DEFAULT_Z_BASE,
            DEFAULT_Z_STEP,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn open_store(&self) -> FileStore {
        FileStore::with_slot(self.store_path(), self.store_slot.clone())
    }

    pub fn view(&self) -> CalGridResult<ViewKind> {
        self.default_view
            .parse()
            .map_err(|e: CalGridError| CalGridError::Config(e.to_string()))
    }

    /// The effective settings, as they would be written to the config file.
    pub fn to_toml(&self) -> CalGridResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalGridError::Serialization(e.to_string()))
    }

    pub fn geometry(&self) -> GeometryConfig {
        GeometryConfig {
            slot_height: self.slot_height,
            width_percent: self.width_percent,
            z_base: self.z_base,
            z_step: self.z_step,
        }
    }
}
