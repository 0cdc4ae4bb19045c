use crate::errors::Result;
use crate::utils::atomic_file;
use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// A stack of layers, top first.
///
/// On disk a cake is a text file with one layer per line, the first line being
/// the top of the stack. An empty cake is a zero-byte file and a missing file
/// reads as an empty cake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cake {
    layers: VecDeque<String>,
}

impl Cake {
    /// Create an empty cake
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cake from layers listed top first
    pub fn from_layers<I, S>(layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            layers: layers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse file content: line 1 is the top
    pub fn parse(content: &str) -> Self {
        Self::from_layers(content.lines())
    }

    /// Render file content: one layer per line, top first, each line terminated
    pub fn render(&self) -> String {
        self.layers.iter().fold(String::new(), |mut out, layer| {
            out.push_str(layer);
            out.push('\n');
            out
        })
    }

    /// Load a cake from disk; a missing file is an empty cake
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let cake = Self::parse(&content);
                debug!("Loaded {} layers from {}", cake.len(), path.display());
                Ok(cake)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No cake at {}, starting empty", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the file at `path` with this cake, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        atomic_file::write_string(path, &self.render())?;
        debug!("Saved {} layers to {}", self.len(), path.display());
        Ok(())
    }

    /// Put a layer on top.
    ///
    /// Content is not validated. A layer containing a newline will come back as
    /// several layers after a save and load.
    pub fn push<S: Into<String>>(&mut self, layer: S) {
        self.layers.push_front(layer.into());
    }

    /// Take the top layer off; `None` when the cake is empty
    pub fn pop(&mut self) -> Option<String> {
        self.layers.pop_front()
    }

    /// The top layer, if any
    pub fn top(&self) -> Option<&str> {
        self.layers.front().map(String::as_str)
    }

    /// Remove every layer
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Layers from top to bottom
    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
