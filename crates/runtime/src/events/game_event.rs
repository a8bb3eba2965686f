//! Game events emitted by session steps.
//!
//! Every accepted player action returns the events it produced, in the order
//! they happened. Events carry enough data for a client to render the step
//! without inspecting the session.

use game_core::{CardinalDirection, DecoratorKind, Item, Position, Spell, TurnSummary};
use serde::{Deserialize, Serialize};

/// High-level game events produced by [`Session::step`](crate::Session::step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The hero moved one tile.
    HeroMoved { from: Position, to: Position },

    /// The hero tried to walk off the edge of the floor.
    MoveBlocked { direction: CardinalDirection },

    /// The hero took the stairs and levelled up.
    FloorDescended {
        floor: u32,
        level: u32,
        max_hp: u32,
    },

    /// An item was stored in the inventory.
    ItemPickedUp { item: Item },

    /// A currency bag was converted to gold.
    GoldCollected { amount: u32, total: u32 },

    /// An item could not be carried and stays on the tile.
    ItemLeftBehind { position: Position },

    /// A monster room produced an enemy.
    EncounterStarted {
        name: String,
        level: u32,
        max_hp: u32,
        depth: u32,
        modifier: Option<DecoratorKind>,
    },

    /// The enemy attacked the hero.
    EnemyAttacked { summary: TurnSummary, hero_hp: u32 },

    /// The hero's basic attack landed.
    HeroAttacked { summary: TurnSummary, enemy_hp: u32 },

    /// The hero cast a spell at the enemy.
    SpellCast {
        spell: Spell,
        damage: u32,
        enemy_hp: u32,
    },

    /// The hero drank a potion.
    PotionConsumed { hp: u32 },

    EnemyDefeated { name: String },

    HeroDied { floor: u32, level: u32 },

    /// The hero ran from a fight.
    Fled { from: Position, to: Position },

    ShopEntered,

    ShopLeft,

    PotionPurchased { price: u32, gold: u32 },

    PurchaseRefused { reason: PurchaseRefusal },

    ItemSold { item: Item, gold: u32 },

    SaleRefused { reason: SaleRefusal },

    /// The hero's health moved into a different band.
    HealthThresholdCrossed {
        threshold: HealthThreshold,
        hp_percent: u32,
    },
}

/// Why a potion purchase did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseRefusal {
    NotEnoughGold { price: u32, gold: u32 },
    InventoryFull,
    /// The catalog has no potion template.
    OutOfStock,
}

/// Why an item could not be sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleRefusal {
    /// Selling would leave the hero at 0 HP.
    Lethal { name: String },
    NotHeld { name: String },
}

/// Health threshold levels for triggering effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthThreshold {
    /// 100% HP
    Full,
    /// 75-99% HP
    Healthy,
    /// 25-74% HP
    Wounded,
    /// 1-24% HP
    Critical,
    /// 0% HP (dead)
    Dead,
}

impl HealthThreshold {
    /// Calculate health threshold from current and max HP.
    pub fn from_hp(current: u32, max: u32) -> Self {
        if current == 0 {
            Self::Dead
        } else if max == 0 {
            Self::Full
        } else {
            match hp_percent(current, max) {
                100.. => Self::Full,
                75..=99 => Self::Healthy,
                25..=74 => Self::Wounded,
                _ => Self::Critical,
            }
        }
    }
}

/// `current` as a whole percentage of `max`, rounded down.
pub fn hp_percent(current: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (u64::from(current) * 100 / u64::from(max)) as u32
}
