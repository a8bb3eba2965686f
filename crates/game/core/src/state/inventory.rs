//! Bounded, ordered item storage for the hero.
//!
//! The inventory itself only stores items; the HP coupling applied on pickup
//! and removal lives on [`Hero`](crate::actor::Hero), which owns one.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Item;

/// Errors raised by slot-addressed inventory access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The requested slot does not hold an item.
    #[error("inventory slot {index} out of range (holding {len} items)")]
    SlotOutOfRange { index: usize, len: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InventoryError::SlotOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::SlotOutOfRange { .. } => "INVENTORY_SLOT_OUT_OF_RANGE",
        }
    }
}

/// Ordered sequence of at most [`GameConfig::MAX_INVENTORY_SLOTS`] items.
///
/// Insertion order is significant: slots are addressed by index for display
/// and selling.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Snapshot of the held items in slot order.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Index of the first item whose name matches exactly.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    pub fn contains_potion(&self) -> bool {
        self.items.iter().any(Item::is_potion)
    }

    /// Appends an item, handing it back when every slot is taken.
    pub fn push(&mut self, item: Item) -> Result<(), Item> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes the item at `index`, shifting later items down one slot.
    pub fn remove(&mut self, index: usize) -> Result<Item, InventoryError> {
        let len = self.items.len();
        if index >= len {
            return Err(InventoryError::SlotOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trinket(name: &str) -> Item {
        Item::new(name, 1, "")
    }

    #[test]
    fn push_rejects_when_full_and_returns_item() {
        let mut inventory = Inventory::empty();
        for i in 0..GameConfig::MAX_INVENTORY_SLOTS {
            inventory.push(trinket(&format!("t{i}"))).unwrap();
        }
        assert!(inventory.is_full());

        let rejected = inventory.push(trinket("extra")).unwrap_err();
        assert_eq!(rejected.name(), "extra");
        assert_eq!(inventory.len(), GameConfig::MAX_INVENTORY_SLOTS);
    }

    #[test]
    fn remove_preserves_order_of_remaining_items() {
        let mut inventory = Inventory::empty();
        for name in ["a", "b", "c"] {
            inventory.push(trinket(name)).unwrap();
        }

        let removed = inventory.remove(1).unwrap();
        assert_eq!(removed.name(), "b");
        let names: Vec<&str> = inventory.iter().map(Item::name).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut inventory = Inventory::empty();
        inventory.push(trinket("a")).unwrap();
        assert_eq!(
            inventory.remove(3),
            Err(InventoryError::SlotOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn position_of_finds_first_exact_match() {
        let mut inventory = Inventory::empty();
        for name in ["a", "b", "a"] {
            inventory.push(trinket(name)).unwrap();
        }
        assert_eq!(inventory.position_of("a"), Some(0));
        assert_eq!(inventory.position_of("z"), None);
    }
}
