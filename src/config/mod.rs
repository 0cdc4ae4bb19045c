pub mod settings;

pub use settings::{Settings, DEFAULT_CAKE};

use crate::errors::{KekiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the application directory inside the platform data directory
pub const APP_DIR_NAME: &str = "Keki";

/// File holding the current-cake pointer
pub const SETTINGS_FILE: &str = "settings.json";

/// Subdirectory holding the cake files (the bakery)
pub const CAKES_DIR: &str = "cake";

/// Get the Keki data directory (e.g. ~/.local/share/Keki on Linux)
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| KekiError::config("Could not find the application data directory"))?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Path of the settings file inside a data directory
pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE)
}

/// Path of the bakery directory inside a data directory
pub fn cakes_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(CAKES_DIR)
}

/// Ensure the data directory and its bakery exist
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            KekiError::config(format!("Failed to create data directory: {}", e))
        })?;
    }

    let cakes_dir = cakes_dir(data_dir);
    if !cakes_dir.exists() {
        fs::create_dir_all(&cakes_dir).map_err(|e| {
            KekiError::config(format!("Failed to create cake directory: {}", e))
        })?;
    }

    Ok(())
}
