//! Plain data carried by actors: positions, items and the hero's inventory.
//!
//! Types here hold no game rules beyond their own structural invariants;
//! the HP coupling between items and their holder lives in [`crate::actor`].
mod common;
mod inventory;
mod item;

pub use common::{CardinalDirection, Position};
pub use inventory::{Inventory, InventoryError};
pub use item::{GOLD_BAG_NAME, Item, POTION_NAME};
