//! Numeric state shared by every actor.
//!
//! A [`StatBlock`] is embedded in the hero and in every enemy layer. Its
//! mutators are the only way HP, max HP and level change, and none of them
//! can fail.
mod block;

pub use block::StatBlock;
