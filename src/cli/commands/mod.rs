pub mod cake;
pub mod completions;
pub mod layer;

pub use cake::RemoveTarget;

use crate::cli::output::Output;
use crate::config::{self, Settings};
use crate::errors::Result;
use crate::prompt::InputProvider;
use crate::stack::{Bakery, Cake};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a command needs for one invocation: the loaded settings, the
/// bakery they point into and a way to ask the user for missing arguments.
///
/// Nothing is cached between invocations; each command loads what it needs
/// from disk and writes back what it changes.
pub struct Kitchen<'a> {
    settings_path: PathBuf,
    settings: Settings,
    bakery: Bakery,
    input: &'a dyn InputProvider,
}

impl<'a> Kitchen<'a> {
    /// Prepare the data directory and load the settings it holds
    pub fn open(data_dir: &Path, input: &'a dyn InputProvider) -> Result<Self> {
        config::ensure_data_dir(data_dir)?;
        let settings_path = config::settings_path(data_dir);
        let settings = Settings::load(&settings_path)?;
        let bakery = Bakery::open(&config::cakes_dir(data_dir))?;
        debug!(
            "Opened kitchen at {} with current cake '{}'",
            data_dir.display(),
            settings.cake
        );

        Ok(Self {
            settings_path,
            settings,
            bakery,
            input,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bakery(&self) -> &Bakery {
        &self.bakery
    }

    pub fn input(&self) -> &dyn InputProvider {
        self.input
    }

    /// Name of the cake commands operate on
    pub fn current_cake(&self) -> &str {
        &self.settings.cake
    }

    pub fn load_current(&self) -> Result<Cake> {
        self.bakery.load_cake(self.current_cake())
    }

    pub fn save_current(&self, cake: &Cake) -> Result<()> {
        self.bakery.save_cake(self.current_cake(), cake)
    }

    /// Point the settings at another cake and persist them right away
    pub fn set_current(&mut self, name: String) -> Result<()> {
        self.settings.cake = name;
        self.settings.save(&self.settings_path)
    }

    /// Print the current cake
    pub fn show_current(&self) -> Result<()> {
        let cake = self.load_current()?;
        Output::cake(self.current_cake(), &cake);
        Ok(())
    }
}
