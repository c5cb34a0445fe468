//! Remembered selection areas, one per display.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::selection::SelectionRect;

const AREAS_FILE: &str = "areas.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("area store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("area store is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Narrow read/write interface the selection engine persists through.
pub trait AreaStore {
    fn load(&self, display: &str) -> StoreResult<Option<SelectionRect>>;
    fn save(&mut self, display: &str, rect: SelectionRect) -> StoreResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryAreaStore {
    areas: HashMap<String, SelectionRect>,
}

impl MemoryAreaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AreaStore for MemoryAreaStore {
    fn load(&self, display: &str) -> StoreResult<Option<SelectionRect>> {
        Ok(self.areas.get(display).copied())
    }

    fn save(&mut self, display: &str, rect: SelectionRect) -> StoreResult<()> {
        self.areas.insert(display.to_string(), rect);
        Ok(())
    }
}

/// JSON object keyed by display name, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonAreaStore {
    path: PathBuf,
}

impl JsonAreaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store next to the configuration file, if a config directory exists.
    pub fn in_config_dir() -> Option<Self> {
        Config::config_dir().map(|dir| Self::new(dir.join(AREAS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, SelectionRect>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl AreaStore for JsonAreaStore {
    fn load(&self, display: &str) -> StoreResult<Option<SelectionRect>> {
        Ok(self.read_all()?.get(display).copied())
    }

    fn save(&mut self, display: &str, rect: SelectionRect) -> StoreResult<()> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut areas = match self.read_all() {
            Ok(areas) => areas,
            Err(StoreError::Parse(e)) => {
                tracing::warn!("Discarding unreadable area store {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        areas.insert(display.to_string(), rect);

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&areas)?)?;
        Ok(())
    }
}

impl<S: AreaStore + ?Sized> AreaStore for Box<S> {
    fn load(&self, display: &str) -> StoreResult<Option<SelectionRect>> {
        (**self).load(display)
    }

    fn save(&mut self, display: &str, rect: SelectionRect) -> StoreResult<()> {
        (**self).save(display, rect)
    }
}
