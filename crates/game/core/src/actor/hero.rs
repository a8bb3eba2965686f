use super::Combatant;
use crate::combat::{AttackKind, AttackReport, Side, Spell, Strike};
use crate::config::GameConfig;
use crate::env::{MapDimensions, RngOracle};
use crate::state::{CardinalDirection, Inventory, InventoryError, Item, Position};
use crate::stats::StatBlock;

/// Result of offering an item to the hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Appended to the inventory.
    Stored,
    /// Currency bag converted to gold; nothing was stored.
    GoldCredited(u32),
    /// Inventory full; the item is handed back untouched.
    NoSpace(Item),
}

impl PickupOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, PickupOutcome::NoSpace(_))
    }
}

/// Result of trying to take an item out of the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Item),
    /// Removing the item would leave the hero at 0 HP; nothing changed.
    Refused,
    NotFound,
}

impl RemoveOutcome {
    pub fn removed(self) -> Option<Item> {
        match self {
            RemoveOutcome::Removed(item) => Some(item),
            _ => None,
        }
    }
}

/// The player actor.
///
/// Non-potion items in the inventory are load-bearing: their value is part of
/// the hero's max HP and current HP for as long as they are held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    stats: StatBlock,
    inventory: Inventory,
    gold: u32,
    position: Position,
    gold_bag_credit: u32,
}

impl Hero {
    /// Level 1 hero standing on `start` with the configured HP and purse.
    pub fn new(config: &GameConfig, start: Position) -> Self {
        Self {
            stats: StatBlock::new(
                config.hero_name.as_str(),
                config.hero_quip.as_str(),
                1,
                config.hero_max_hp,
            ),
            inventory: Inventory::empty(),
            gold: config.starting_gold,
            position: start,
            gold_bag_credit: config.gold_bag_credit,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Snapshot of the held items in slot order.
    pub fn items(&self) -> &[Item] {
        self.inventory.as_slice()
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the hero without any bounds check, e.g. after a floor change.
    pub fn place(&mut self, position: Position) {
        self.position = position;
    }

    /// Moves one tile in `direction` if the destination lies inside `dimensions`.
    ///
    /// Returns whether the hero moved.
    pub fn step(&mut self, direction: CardinalDirection, dimensions: MapDimensions) -> bool {
        let next = self.position.step(direction);
        if !dimensions.contains(next) {
            return false;
        }
        self.position = next;
        true
    }

    pub fn collect_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Deducts `amount` if the balance covers it. Returns whether gold was spent.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(balance) => {
                self.gold = balance;
                true
            }
            None => false,
        }
    }

    /// Offers `item` to the hero.
    ///
    /// A currency bag becomes gold immediately. Anything else is stored if a
    /// slot is free, and unless it is a potion its value raises both max HP
    /// and current HP.
    pub fn pick_up_item(&mut self, item: Item) -> PickupOutcome {
        if item.is_gold_bag() {
            self.collect_gold(self.gold_bag_credit);
            return PickupOutcome::GoldCredited(self.gold_bag_credit);
        }

        let buff = item.grants_hp().then_some(item.value());
        if let Err(item) = self.inventory.push(item) {
            return PickupOutcome::NoSpace(item);
        }
        if let Some(amount) = buff {
            self.stats.increase_max_hp(amount);
            self.stats.heal(amount);
        }
        PickupOutcome::Stored
    }

    /// Removes the first item named `name`.
    ///
    /// Only the first match is considered: if it is unsafe to remove, later
    /// items with the same name are not tried.
    pub fn remove_item_named(&mut self, name: &str) -> RemoveOutcome {
        match self.inventory.position_of(name) {
            Some(index) => self.remove_slot(index),
            None => RemoveOutcome::NotFound,
        }
    }

    /// Removes the item in slot `index`, under the same safety rule as
    /// [`remove_item_named`](Self::remove_item_named).
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::SlotOutOfRange`] if the slot is empty.
    pub fn remove_item_at(&mut self, index: usize) -> Result<RemoveOutcome, InventoryError> {
        let len = self.inventory.len();
        if index >= len {
            return Err(InventoryError::SlotOutOfRange { index, len });
        }
        Ok(self.remove_slot(index))
    }

    fn remove_slot(&mut self, index: usize) -> RemoveOutcome {
        let Some(item) = self.inventory.get(index) else {
            return RemoveOutcome::NotFound;
        };
        let penalty = item.grants_hp().then_some(item.value());

        if penalty.is_some_and(|amount| self.stats.hp() <= amount) {
            return RemoveOutcome::Refused;
        }

        match self.inventory.remove(index) {
            Ok(item) => {
                if let Some(amount) = penalty {
                    self.stats.take_damage(amount);
                    self.stats.decrease_max_hp(amount);
                }
                RemoveOutcome::Removed(item)
            }
            Err(_) => RemoveOutcome::NotFound,
        }
    }

    pub fn has_potion(&self) -> bool {
        self.inventory.contains_potion()
    }

    /// Heals by `heal` and consumes one potion. Returns false if none is held.
    pub fn drink_potion(&mut self, heal: u32) -> bool {
        let Some(index) = self.inventory.iter().position(Item::is_potion) else {
            return false;
        };
        self.stats.heal(heal);
        self.inventory.remove(index).is_ok()
    }

    /// Gains a level, raising max HP by `bonus` and healing the same amount.
    pub fn level_up(&mut self, bonus: u32) {
        self.stats.increase_level();
        self.stats.increase_max_hp(bonus);
        self.stats.heal(bonus);
    }

    /// Rolls one spell's damage without applying it.
    pub fn cast(&self, spell: Spell, rng: &mut dyn RngOracle) -> u32 {
        spell.roll(rng, self.stats.level())
    }

    /// Casts `spell` at `target`, applying the rolled damage.
    pub fn cast_at(
        &self,
        spell: Spell,
        target: &mut dyn Combatant,
        rng: &mut dyn RngOracle,
    ) -> Strike {
        let damage = self.cast(spell, rng);
        target.take_damage(damage);
        Strike::new(spell.attack_kind(), damage)
    }
}

impl Combatant for Hero {
    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    fn side(&self) -> Side {
        Side::Hero
    }

    fn strike(&self, target: &mut dyn Combatant, rng: &mut dyn RngOracle) -> AttackReport {
        let damage = AttackKind::Physical.roll(rng, self.stats.level());
        target.take_damage(damage);
        AttackReport::single(Strike::new(AttackKind::Physical, damage))
    }
}
