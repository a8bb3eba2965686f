use game_core::{CardinalDirection, Spell};
use serde::{Deserialize, Serialize};

/// One player input. Each is resolved atomically by [`Session::step`](super::Session::step).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Walk one room while exploring or shopping.
    Move(CardinalDirection),
    /// Basic attack during a fight.
    Attack,
    Cast(Spell),
    /// Drink one potion during a fight.
    DrinkPotion,
    /// Run from a fight to a random neighbouring room.
    Flee,
    BuyPotion,
    /// Sell the item in this inventory slot.
    Sell(usize),
    /// Sell the first item with this name.
    SellNamed(String),
    LeaveShop,
}

impl PlayerAction {
    /// Whether this action belongs to a fight round.
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            PlayerAction::Attack
                | PlayerAction::Cast(_)
                | PlayerAction::DrinkPotion
                | PlayerAction::Flee
        )
    }

    /// Whether this action is a shop transaction.
    pub fn is_shop(&self) -> bool {
        matches!(
            self,
            PlayerAction::BuyPotion
                | PlayerAction::Sell(_)
                | PlayerAction::SellNamed(_)
                | PlayerAction::LeaveShop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_split_into_fight_and_shop_groups() {
        let fight = [
            PlayerAction::Attack,
            PlayerAction::Cast(Spell::Fireball),
            PlayerAction::DrinkPotion,
            PlayerAction::Flee,
        ];
        let shop = [
            PlayerAction::BuyPotion,
            PlayerAction::Sell(0),
            PlayerAction::SellNamed("Iron Helm".into()),
            PlayerAction::LeaveShop,
        ];

        assert!(fight.iter().all(|action| action.is_combat() && !action.is_shop()));
        assert!(shop.iter().all(|action| action.is_shop() && !action.is_combat()));

        let walk = PlayerAction::Move(CardinalDirection::West);
        assert!(!walk.is_combat());
        assert!(!walk.is_shop());
    }
}
