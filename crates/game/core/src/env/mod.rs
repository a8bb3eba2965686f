//! Traits and catalogs describing world data the core consumes.
//!
//! The random source, the item catalog and the floor map are handed to the
//! actors and generators explicitly; there are no process-wide singletons.
mod error;
mod items;
mod map;
mod rng;

pub use error::OracleError;
pub use items::ItemCatalog;
pub use map::{MapDimensions, MapOracle, TileKind};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};
