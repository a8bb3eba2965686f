//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, ItemCatalog};

use crate::loaders::{ConfigLoader, FloorLayout, ItemLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── floors/
///     ├── Map1.ron
///     ├── Map2.ron
///     └── Map3.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load_catalog(&path)
    }

    /// Load a single floor from `floors/{floor_name}.ron`.
    pub fn load_floor(&self, floor_name: &str) -> LoadResult<FloorLayout> {
        let path = self.floors_dir().join(format!("{}.ron", floor_name));
        MapLoader::load(&path)
    }

    /// Load every floor under `floors/`, in visiting order.
    pub fn load_floors(&self) -> LoadResult<Vec<FloorLayout>> {
        MapLoader::load_dir(&self.floors_dir())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn floors_dir(&self) -> PathBuf {
        self.data_dir.join("floors")
    }
}
