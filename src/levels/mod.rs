mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use log::info;
use crate::core::{Level, LevelError};

pub use builtin::builtin_levels;

static BUILTIN: LazyLock<Result<LevelCatalog, LevelError>> =
    LazyLock::new(|| LevelCatalog::new(builtin_levels()?));

/// Ordered, immutable list of levels. Lookups never mutate it.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<Level>) -> Result<LevelCatalog, LevelError> {
        let mut seen = HashSet::new();
        for level in &levels {
            if !seen.insert(level.id()) {
                return Err(LevelError::DuplicateId(level.id()));
            }
        }
        Ok(LevelCatalog { levels })
    }

    /// The levels shipped with the game, validated once on first use.
    pub fn builtin() -> Result<&'static LevelCatalog, LevelError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Parses a JSON array of level definitions, validating each one.
    pub fn from_json(json: &str) -> Result<LevelCatalog, LevelError> {
        let levels: Vec<Level> =
            serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))?;
        LevelCatalog::new(levels)
    }

    pub fn load(path: &Path) -> Result<LevelCatalog, LevelError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| LevelError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = LevelCatalog::from_json(&json)?;
        info!("Loaded {} levels from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        serde_json::to_string_pretty(&self.levels).map_err(|e| LevelError::Parse(e.to_string()))
    }

    pub fn find(&self, id: u32) -> Result<&Level, LevelError> {
        self.levels
            .iter()
            .find(|level| level.id() == id)
            .ok_or(LevelError::NotFound(id))
    }

    /// The level to play after `id` is won, `None` when it was the last one.
    pub fn next_after(&self, id: u32) -> Option<&Level> {
        let next_id = id.checked_add(1)?;
        self.find(next_id).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
