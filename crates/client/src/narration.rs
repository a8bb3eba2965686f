//! Plain-text lines for game events.
use runtime::{GameEvent, HealthThreshold, PurchaseRefusal, SaleRefusal};

pub fn narrate(event: &GameEvent) -> String {
    match event {
        GameEvent::HeroMoved { to, .. } => format!("You walk to {to}."),
        GameEvent::MoveBlocked { direction } => format!("A wall blocks the way {direction}."),
        GameEvent::FloorDescended {
            floor,
            level,
            max_hp,
        } => format!("You descend to floor {floor}. Level {level}, max HP {max_hp}."),
        GameEvent::ItemPickedUp { item } => {
            format!("You pick up {} (worth {}).", item.name(), item.value())
        }
        GameEvent::GoldCollected { amount, total } => {
            format!("You find {amount} gold. Purse: {total}.")
        }
        GameEvent::ItemLeftBehind { position } => {
            format!("Your pack is full; the item at {position} stays behind.")
        }
        GameEvent::EncounterStarted {
            name,
            level,
            max_hp,
            ..
        } => format!("A level {level} {name} ({max_hp} HP) blocks your path!"),
        GameEvent::EnemyAttacked { summary, hero_hp } => {
            format!("{summary} You have {hero_hp} HP.")
        }
        GameEvent::HeroAttacked { summary, enemy_hp } => {
            format!("{summary} It has {enemy_hp} HP left.")
        }
        GameEvent::SpellCast {
            spell,
            damage,
            enemy_hp,
        } => format!("You cast {spell} for {damage} damage. It has {enemy_hp} HP left."),
        GameEvent::PotionConsumed { hp } => format!("You drink a potion. HP: {hp}."),
        GameEvent::EnemyDefeated { name } => format!("The {name} falls."),
        GameEvent::HeroDied { floor, level } => {
            format!("You died on floor {floor} at level {level}.")
        }
        GameEvent::Fled { to, .. } => format!("You flee to {to}."),
        GameEvent::ShopEntered => "You enter the shop.".to_owned(),
        GameEvent::ShopLeft => "You leave the shop.".to_owned(),
        GameEvent::PotionPurchased { price, gold } => {
            format!("You buy a potion for {price} gold. Purse: {gold}.")
        }
        GameEvent::PurchaseRefused { reason } => match reason {
            PurchaseRefusal::NotEnoughGold { price, gold } => {
                format!("A potion costs {price} gold; you have {gold}.")
            }
            PurchaseRefusal::InventoryFull => "Your pack has no room for a potion.".to_owned(),
            PurchaseRefusal::OutOfStock => "The shop has no potions.".to_owned(),
        },
        GameEvent::ItemSold { item, gold } => {
            format!("You sell {} for {}. Purse: {gold}.", item.name(), item.value())
        }
        GameEvent::SaleRefused { reason } => match reason {
            SaleRefusal::Lethal { name } => format!("Selling {name} would kill you."),
            SaleRefusal::NotHeld { name } => format!("You carry no {name}."),
        },
        GameEvent::HealthThresholdCrossed {
            threshold,
            hp_percent,
        } => match threshold {
            HealthThreshold::Full => "You are at full health.".to_owned(),
            HealthThreshold::Healthy => format!("You feel fine ({hp_percent}%)."),
            HealthThreshold::Wounded => format!("You are wounded ({hp_percent}%)."),
            HealthThreshold::Critical => format!("You are badly hurt ({hp_percent}%)!"),
            HealthThreshold::Dead => "Everything goes dark.".to_owned(),
        },
    }
}
