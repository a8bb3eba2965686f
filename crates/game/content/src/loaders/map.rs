//! Floor layout loader.
//!
//! A floor file lists its rows top to bottom, one glyph per tile:
//!
//! ```ron
//! (
//!     rows: [
//!         "snmni",
//!         "nmnin",
//!         "ninmn",
//!         "mnnin",
//!         "inmnf",
//!     ],
//! )
//! ```
//!
//! Glyphs: `s` start (doubles as the shop), `m` monster, `i` item, `f` exit,
//! `n` empty.

use std::path::{Path, PathBuf};

use game_core::{MapDimensions, Position, TileKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Floor data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FloorRon {
    rows: Vec<String>,
}

/// Parsed, validated floor grid.
///
/// Tiles are stored row-major; `Position { x, y }` addresses column `x` of row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorLayout {
    name: String,
    dimensions: MapDimensions,
    tiles: Vec<TileKind>,
}

impl FloorLayout {
    /// Builds a layout from glyph rows.
    ///
    /// Rows must be non-empty and of equal width, every glyph must be known,
    /// and at least one start tile must be present.
    pub fn from_rows<S: AsRef<str>>(name: impl Into<String>, rows: &[S]) -> LoadResult<Self> {
        let name = name.into();
        let Some(first) = rows.first() else {
            anyhow::bail!("Floor {} has no rows", name);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            anyhow::bail!("Floor {} has an empty first row", name);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                anyhow::bail!(
                    "Floor {} row {} has {} tiles, expected {}",
                    name,
                    y,
                    row.chars().count(),
                    width
                );
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile = TileKind::from_glyph(glyph).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Floor {} has unknown glyph {:?} at ({}, {})",
                        name,
                        glyph,
                        x,
                        y
                    )
                })?;
                tiles.push(tile);
            }
        }

        if !tiles.contains(&TileKind::Start) {
            anyhow::bail!("Floor {} has no start tile", name);
        }

        Ok(Self {
            name,
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            tiles,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.index_of(position).map(|index| self.tiles[index])
    }

    /// First start tile in row-major order.
    pub fn start(&self) -> Option<Position> {
        self.positions()
            .find(|position| self.tile(*position) == Some(TileKind::Start))
    }

    /// Every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as i32;
        let height = self.dimensions.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Glyph rows, the inverse of [`from_rows`](Self::from_rows).
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|tile| tile.glyph()).collect())
            .collect()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

/// Loader for floor layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load one floor layout. The layout is named after the file stem.
    pub fn load(path: &Path) -> LoadResult<FloorLayout> {
        let content = read_file(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::parse(name, &content)
    }

    /// Parse one floor layout from RON text.
    pub fn parse(name: impl Into<String>, content: &str) -> LoadResult<FloorLayout> {
        let data: FloorRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse floor RON: {}", e))?;
        FloorLayout::from_rows(name, &data.rows)
    }

    /// Load every `*.ron` floor in `dir`, ordered by file name.
    ///
    /// The order is the order floors are visited in.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<FloorLayout>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| {
                anyhow::anyhow!("Failed to read floor directory {}: {}", dir.display(), e)
            })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            anyhow::bail!("No floor layouts found in {}", dir.display());
        }

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
