//! Floor grids served through [`game_core::MapOracle`].
use game_content::FloorLayout;
use game_core::{MapDimensions, MapOracle, Position, TileKind};

use crate::api::{Result, RuntimeError};

/// MapOracle implementation over a rotation of loaded floor layouts.
///
/// Holds the live copy of the current floor: tiles cleared or turned into item
/// rooms during play, and which rooms the hero has seen. Moving to the next
/// floor reloads the pristine layout and forgets every reveal.
#[derive(Debug, Clone)]
pub struct FloorMap {
    layouts: Vec<FloorLayout>,
    current: usize,
    dimensions: MapDimensions,
    tiles: Vec<TileKind>,
    revealed: Vec<bool>,
}

impl FloorMap {
    /// Starts on the first layout.
    pub fn new(layouts: Vec<FloorLayout>) -> Result<Self> {
        let Some(first) = layouts.first() else {
            return Err(RuntimeError::NoFloors);
        };
        let (dimensions, tiles) = Self::snapshot(first);
        let revealed = vec![false; tiles.len()];
        Ok(Self {
            layouts,
            current: 0,
            dimensions,
            tiles,
            revealed,
        })
    }

    /// 1-based number of the layout currently loaded.
    pub fn layout_number(&self) -> u32 {
        self.current as u32 + 1
    }

    pub fn layout_name(&self) -> &str {
        self.layouts[self.current].name()
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Text picture of the floor, one line per row.
    ///
    /// `*` marks the hero, `x` an unrevealed room, a space a revealed empty
    /// room; any other revealed room shows its glyph.
    pub fn render(&self, hero: Position) -> String {
        let width = self.dimensions.width as i32;
        let height = self.dimensions.height as i32;
        let mut out = String::with_capacity(self.tiles.len() + height as usize);
        for y in 0..height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..width {
                let position = Position::new(x, y);
                let glyph = match self.index_of(position) {
                    _ if position == hero => '*',
                    Some(index) if !self.revealed[index] => 'x',
                    Some(index) if self.tiles[index] == TileKind::Empty => ' ',
                    Some(index) => self.tiles[index].glyph(),
                    None => ' ',
                };
                out.push(glyph);
            }
        }
        out
    }

    fn snapshot(layout: &FloorLayout) -> (MapDimensions, Vec<TileKind>) {
        let tiles = layout
            .positions()
            .map(|position| layout.tile(position).unwrap_or(TileKind::Empty))
            .collect();
        (layout.dimensions(), tiles)
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    fn set_tile(&mut self, position: Position, tile: TileKind) {
        if let Some(index) = self.index_of(position) {
            self.tiles[index] = tile;
        }
    }
}

impl MapOracle for FloorMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<TileKind> {
        self.index_of(position).map(|index| self.tiles[index])
    }

    fn start(&self) -> Option<Position> {
        self.layouts[self.current].start()
    }

    fn reveal(&mut self, position: Position) {
        if let Some(index) = self.index_of(position) {
            self.revealed[index] = true;
        }
    }

    fn is_revealed(&self, position: Position) -> bool {
        self.index_of(position)
            .is_some_and(|index| self.revealed[index])
    }

    fn clear_tile(&mut self, position: Position) {
        self.set_tile(position, TileKind::Empty);
    }

    fn mark_item_tile(&mut self, position: Position) {
        self.set_tile(position, TileKind::Item);
    }

    fn next_floor(&mut self) -> u32 {
        self.current = (self.current + 1) % self.layout_count();
        let (dimensions, tiles) = Self::snapshot(&self.layouts[self.current]);
        self.revealed = vec![false; tiles.len()];
        self.dimensions = dimensions;
        self.tiles = tiles;
        self.layout_number()
    }
}
