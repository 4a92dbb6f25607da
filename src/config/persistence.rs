//! Settings file on disk.
//!
//! Settings live in `<config dir>/slate/config.json`. Reading never fails
//! the application: a missing or blank file means defaults, a broken one is
//! reported and also replaced by defaults. Writes go to a sibling `.bak`
//! file that is then renamed over the real one.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "slate";

const CONFIG_FILE_NAME: &str = "config.json";

/// Written first, then renamed to `CONFIG_FILE_NAME`
const CONFIG_TEMP_NAME: &str = "config.json.bak";

/// Location of the settings file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Store in the platform config directory: `%APPDATA%\slate` on
    /// Windows, `~/Library/Application Support/slate` on macOS and
    /// `~/.config/slate` on Linux.
    pub fn platform() -> Result<Self> {
        let base = dirs::config_dir().ok_or(Error::ConfigDirNotFound)?;
        Ok(Self::at(base.join(CONFIG_DIR_NAME)))
    }

    /// Store in an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Read the settings, clamped to valid ranges.
    pub fn load(&self) -> Result<Settings> {
        let path = self.file_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, starting with defaults", path.display());
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(Error::ConfigLoad {
                    path,
                    source: Box::new(e),
                })
            }
        };

        if contents.trim().is_empty() {
            debug!("Settings file {} is blank", path.display());
            return Ok(Settings::default());
        }

        let settings = Settings::from_json_sanitized(&contents).map_err(|e| Error::ConfigParse {
            message: format!("{} is not valid settings JSON: {}", path.display(), e),
            source: Some(Box::new(e)),
        })?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write the settings, creating the directory on first use.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| save_error(&self.dir, e))?;

        let target = self.file_path();
        let temp = self.dir.join(CONFIG_TEMP_NAME);
        let json = serde_json::to_string_pretty(settings).map_err(|e| save_error(&target, e))?;
        fs::write(&temp, json).map_err(|e| save_error(&temp, e))?;
        fs::rename(&temp, &target).map_err(|e| save_error(&target, e))?;

        debug!("Saved settings to {}", target.display());
        Ok(())
    }
}

fn save_error(path: &Path, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::ConfigSave {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Settings from the platform store, or defaults when they cannot be read.
pub fn load_config() -> Settings {
    ConfigStore::platform()
        .and_then(|store| store.load())
        .unwrap_or_warn_default(Settings::default(), "Could not read settings")
}

/// Write settings to the platform store; failures are only logged.
pub fn save_config_silent(settings: &Settings) -> bool {
    match ConfigStore::platform().and_then(|store| store.save(settings)) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not save settings: {}", e);
            false
        }
    }
}
