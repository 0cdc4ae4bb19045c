use super::Cake;
use crate::errors::{KekiError, Result};
use crate::utils::path_validation::CAKE_EXTENSION;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of removing a single cake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The cake file existed and was deleted
    Removed,
    /// There was no cake by that name
    Missing,
}

/// A directory of cake files, one `<name>.txt` per cake
#[derive(Debug, Clone)]
pub struct Bakery {
    dir: PathBuf,
}

impl Bakery {
    /// Open the bakery at `dir`, creating the directory if needed
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            KekiError::storage(format!("Failed to create bakery at {dir:?}: {e}"))
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the cake called `name`
    pub fn cake_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{CAKE_EXTENSION}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cake_path(name).is_file()
    }

    pub fn load_cake(&self, name: &str) -> Result<Cake> {
        Cake::load(&self.cake_path(name))
    }

    pub fn save_cake(&self, name: &str, cake: &Cake) -> Result<()> {
        cake.save(&self.cake_path(name))
    }

    /// Make sure a (possibly empty) file exists for `name` without touching existing layers
    pub fn ensure_cake(&self, name: &str) -> Result<()> {
        if !self.contains(name) {
            self.save_cake(name, &Cake::new())?;
            debug!("Created empty cake '{}'", name);
        }
        Ok(())
    }

    /// Names of all cakes, sorted
    pub fn list_cakes(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let is_cake = path
                .extension()
                .is_some_and(|ext| ext == CAKE_EXTENSION);
            if let (true, Some(stem)) = (is_cake, path.file_stem()) {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete the cake called `name`
    pub fn remove_cake(&self, name: &str) -> Result<RemoveOutcome> {
        match fs::remove_file(self.cake_path(name)) {
            Ok(()) => {
                debug!("Removed cake '{}'", name);
                Ok(RemoveOutcome::Removed)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RemoveOutcome::Missing),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete every cake, returning how many were removed
    pub fn remove_all(&self) -> Result<usize> {
        let names = self.list_cakes()?;
        let mut removed = 0;
        for name in &names {
            if self.remove_cake(name)? == RemoveOutcome::Removed {
                removed += 1;
            }
        }
        debug!("Removed {} cakes", removed);
        Ok(removed)
    }
}
