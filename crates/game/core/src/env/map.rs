use crate::state::Position;

/// Location service for the current floor.
///
/// The core never stores map state. It only asks what the hero is standing
/// on and tells the map to update the tile once a room has been resolved.
/// Unlike the other oracles this one is mutable: reveals and tile clears are
/// owned by the map implementation.
pub trait MapOracle: Send {
    fn dimensions(&self) -> MapDimensions;

    /// Tile kind at `position`, or `None` outside the floor.
    fn tile(&self, position: Position) -> Option<TileKind>;

    /// Where the hero enters the current floor.
    fn start(&self) -> Option<Position>;

    /// Marks `position` as discovered.
    fn reveal(&mut self, position: Position);

    fn is_revealed(&self, position: Position) -> bool;

    /// Turns a resolved room into an empty one.
    fn clear_tile(&mut self, position: Position);

    /// Leaves an item behind at `position` for a later visit.
    fn mark_item_tile(&mut self, position: Position);

    /// Loads the next floor layout and returns its 1-based number.
    fn next_floor(&mut self) -> u32;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// What a room holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Entry point of the floor; doubles as the shop.
    Start,
    Monster,
    Item,
    /// Stairs to the next floor.
    Exit,
    Empty,
}

impl TileKind {
    /// Single-character glyph used by floor layout files.
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Start => 's',
            TileKind::Monster => 'm',
            TileKind::Item => 'i',
            TileKind::Exit => 'f',
            TileKind::Empty => 'n',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            's' => Some(TileKind::Start),
            'm' => Some(TileKind::Monster),
            'i' => Some(TileKind::Item),
            'f' => Some(TileKind::Exit),
            'n' => Some(TileKind::Empty),
            _ => None,
        }
    }
}
