//! Data-driven content definitions and loaders.
//!
//! This crate reads the static content a session is built from:
//! - Item catalog (data-driven via RON)
//! - Floor layouts (5x5 glyph grids via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is parsed once at startup and handed to the core as plain values;
//! nothing here is consulted after a session starts.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, FloorLayout, ItemLoader, LoadResult, MapLoader};
