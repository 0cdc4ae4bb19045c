use crate::errors::Result;
use crate::utils::atomic_file;
use crate::utils::path_validation::validate_cake_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Cake used when no settings exist yet
pub const DEFAULT_CAKE: &str = "keki";

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the current cake
    #[serde(rename = "Cake", alias = "cake")]
    pub cake: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cake: DEFAULT_CAKE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a file.
    ///
    /// A missing or unreadable-as-JSON file falls back to the defaults and the
    /// defaults are written back, so the file is always valid afterwards.
    /// Genuine I/O failures (permissions and the like) are returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, writing defaults", path.display());
            return Self::reset(path);
        }

        let content = fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<Settings>(&content)
            .ok()
            .filter(|settings| validate_cake_name(&settings.cake).is_ok());

        match parsed {
            Some(settings) => {
                debug!("Loaded settings from {}: {:?}", path.display(), settings);
                Ok(settings)
            }
            None => {
                warn!(
                    "Settings at {} are corrupt, falling back to defaults",
                    path.display()
                );
                Self::reset(path)
            }
        }
    }

    /// Save settings to a file, replacing whatever was there
    pub fn save(&self, path: &Path) -> Result<()> {
        atomic_file::write_json(path, self)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    fn reset(path: &Path) -> Result<Self> {
        let settings = Self::default();
        settings.save(path)?;
        Ok(settings)
    }
}
