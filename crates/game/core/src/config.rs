/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Display name given to a freshly created hero.
    pub hero_name: String,
    /// Flavor line shown next to the hero's stats.
    pub hero_quip: String,
    /// Max HP of a level 1 hero before any items are picked up.
    pub hero_max_hp: u32,
    /// Gold balance the hero starts a session with.
    pub starting_gold: u32,
    /// Gold credited when a currency bag is picked up.
    pub gold_bag_credit: u32,
    /// HP restored by drinking one potion.
    pub potion_heal: u32,
    /// Shop price of one potion.
    pub potion_price: u32,
    /// Max HP gained (and healed) whenever the hero reaches a new floor.
    pub level_up_hp: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of inventory slots carried by the hero.
    pub const MAX_INVENTORY_SLOTS: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HERO_MAX_HP: u32 = 15;
    pub const DEFAULT_STARTING_GOLD: u32 = 10;
    pub const DEFAULT_GOLD_BAG_CREDIT: u32 = 25;
    pub const DEFAULT_POTION_HEAL: u32 = 25;
    pub const DEFAULT_POTION_PRICE: u32 = 25;
    pub const DEFAULT_LEVEL_UP_HP: u32 = 10;

    pub fn new() -> Self {
        Self {
            hero_name: "Hero".to_owned(),
            hero_quip: "Onward!".to_owned(),
            hero_max_hp: Self::DEFAULT_HERO_MAX_HP,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            gold_bag_credit: Self::DEFAULT_GOLD_BAG_CREDIT,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            potion_price: Self::DEFAULT_POTION_PRICE,
            level_up_hp: Self::DEFAULT_LEVEL_UP_HP,
        }
    }

    /// Overrides the hero identity, keeping every other tunable.
    pub fn with_hero(mut self, name: impl Into<String>, quip: impl Into<String>) -> Self {
        self.hero_name = name.into();
        self.hero_quip = quip.into();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
