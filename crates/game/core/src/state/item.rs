//! Item values carried by actors and stored in the catalog.

/// Exact name of the healing consumable.
pub const POTION_NAME: &str = "Health Potion";

/// Exact name of the currency bag that converts to gold on pickup.
pub const GOLD_BAG_NAME: &str = "Bag o' Gold";

/// An item template or an independent copy of one.
///
/// `value` is dual-purpose: it is the gold price when sold and the HP delta
/// applied to the holder while the item sits in an inventory. Items have no
/// setters; every copy handed out by the catalog is its own value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    value: u32,
    image: String,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u32, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            image: image.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Opaque reference to the item's artwork.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Single-use heal consumable with no HP-capacity coupling.
    pub fn is_potion(&self) -> bool {
        self.name == POTION_NAME
    }

    /// Converted to gold on pickup, never stored.
    pub fn is_gold_bag(&self) -> bool {
        self.name == GOLD_BAG_NAME
    }

    /// Whether holding this item buffs the holder's max HP by its value.
    pub fn grants_hp(&self) -> bool {
        !self.is_potion() && !self.is_gold_bag()
    }
}
