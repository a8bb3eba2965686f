//! Random adversary generation.
//!
//! The generator is the single place where species and decorator kind are
//! randomised. It borrows the item catalog for the reward draw and takes the
//! RNG per call, so one generator can serve a whole session.

use crate::actor::{ChainError, DecoratorKind, Enemy, Species};
use crate::env::{ItemCatalog, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::Item;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("enemy level must be at least 1")]
    InvalidLevel,

    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GenerationError::InvalidLevel => ErrorSeverity::Validation,
            GenerationError::Chain(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GenerationError::InvalidLevel => "GENERATION_INVALID_LEVEL",
            GenerationError::Chain(err) => err.error_code(),
        }
    }
}

/// Builds enemies and items from a shared catalog.
#[derive(Clone, Copy, Debug)]
pub struct EnemyGenerator<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> EnemyGenerator<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ItemCatalog {
        self.catalog
    }

    /// Generates an enemy at `level`.
    ///
    /// Draws, in order: the species, the reward item, then a coin choosing
    /// Warrior (heads) or Warlock (tails). The base species is wrapped in
    /// `level - 1` layers of the chosen kind.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLevel`] for level 0.
    pub fn generate_enemy(
        &self,
        level: u32,
        rng: &mut dyn RngOracle,
    ) -> Result<Enemy, GenerationError> {
        if level == 0 {
            return Err(GenerationError::InvalidLevel);
        }

        let species = Species::ALL[rng.pick_index(Species::ALL.len())];
        let reward = self.catalog.generate_item(rng);
        let kind = if rng.coin_flip() {
            DecoratorKind::Warrior
        } else {
            DecoratorKind::Warlock
        };

        Enemy::new(species, level, reward)
            .decorated(kind, level - 1)
            .map_err(GenerationError::from)
    }

    /// Uniform catalog draw; see [`ItemCatalog::generate_item`].
    pub fn generate_item(&self, rng: &mut dyn RngOracle) -> Item {
        self.catalog.generate_item(rng)
    }

    /// Copy of the potion template, if the catalog has one.
    pub fn potion(&self) -> Option<Item> {
        self.catalog.potion()
    }
}
