//! Deterministic combat rules and data types for the dungeon crawler.
//!
//! `game-core` defines the stat model, items and the hero's inventory, the
//! actor hierarchy with its decorator chain, and random enemy generation. It
//! performs no I/O and owns no hidden randomness: every draw goes through an
//! [`RngOracle`] supplied by the caller, and map state is reached through the
//! [`MapOracle`] trait implemented by the runtime.
pub mod actor;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod generation;
pub mod state;
pub mod stats;

pub use actor::{
    BaseEnemy, ChainError, Combatant, Decorated, DecoratorKind, Enemy, Hero, PickupOutcome,
    RemoveOutcome, Species, decorated_name,
};
pub use combat::{AttackKind, AttackReport, Side, Spell, Strike, TurnSummary};
pub use config::GameConfig;
pub use env::{
    ItemCatalog, MapDimensions, MapOracle, OracleError, PcgRng, RngOracle, ScriptedRng, TileKind,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use generation::{EnemyGenerator, GenerationError};
pub use state::{
    CardinalDirection, GOLD_BAG_NAME, Inventory, InventoryError, Item, POTION_NAME, Position,
};
pub use stats::StatBlock;
