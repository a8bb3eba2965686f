use game_core::{GameConfig, Hero, MapOracle};

use super::Phase;

/// Read-only snapshot handed to action providers.
#[derive(Clone, Copy)]
pub struct SessionView<'a> {
    pub hero: &'a Hero,
    pub phase: &'a Phase,
    pub map: &'a dyn MapOracle,
    pub config: &'a GameConfig,
    /// Floors reached so far, starting at 1.
    pub floor: u32,
}
