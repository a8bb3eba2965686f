//! Priority-based autopilot that plays the hero.
//!
//! Each call walks a fixed ladder and returns the first action that applies:
//!
//! 1. **Survival**: drink a potion when HP is low, run when there is none
//! 2. **Combat**: finish weak enemies with the basic attack, cast otherwise
//! 3. **Shopping**: restock one potion per visit when affordable, then leave
//! 4. **Exploration**: step towards unrevealed rooms, randomly among ties

use game_core::{CardinalDirection, Combatant, GameConfig, PcgRng, RngOracle, Spell};

use crate::api::ActionProvider;
use crate::events::hp_percent;
use crate::session::{Phase, PlayerAction, SessionView};

/// Tunables for [`AutopilotProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutopilotConfig {
    /// Drink a potion below this HP percentage.
    pub heal_below_percent: u32,
    /// Flee below this HP percentage when no potion is held.
    pub flee_below_percent: u32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            heal_below_percent: 40,
            flee_below_percent: 25,
        }
    }
}

/// [`ActionProvider`] that plays without human input.
pub struct AutopilotProvider {
    config: AutopilotConfig,
    rng: PcgRng,
    shopped: bool,
}

impl AutopilotProvider {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, AutopilotConfig::default())
    }

    pub fn with_config(seed: u64, config: AutopilotConfig) -> Self {
        Self {
            config,
            rng: PcgRng::new(seed),
            shopped: false,
        }
    }

    fn fight(&mut self, view: &SessionView<'_>, enemy_hp: u32) -> PlayerAction {
        let stats = view.hero.stats();
        let percent = hp_percent(stats.hp(), stats.max_hp());

        if percent < self.config.heal_below_percent && view.hero.has_potion() {
            tracing::debug!("Autopilot: low HP ({}%), drinking", percent);
            return PlayerAction::DrinkPotion;
        }
        if percent < self.config.flee_below_percent {
            tracing::debug!("Autopilot: low HP ({}%) and no potion, fleeing", percent);
            return PlayerAction::Flee;
        }

        // lowest physical roll already kills
        if enemy_hp <= stats.level() {
            PlayerAction::Attack
        } else {
            PlayerAction::Cast(Spell::Thunderclap)
        }
    }

    fn shop(&mut self, view: &SessionView<'_>) -> PlayerAction {
        let hero = view.hero;
        let wants_potion = !hero.has_potion()
            && hero.gold() >= view.config.potion_price
            && hero.inventory().len() < GameConfig::MAX_INVENTORY_SLOTS;

        if wants_potion && !self.shopped {
            self.shopped = true;
            return PlayerAction::BuyPotion;
        }
        self.shopped = false;
        PlayerAction::LeaveShop
    }

    fn explore(&mut self, view: &SessionView<'_>) -> PlayerAction {
        let here = view.hero.position();
        let open: Vec<CardinalDirection> = CardinalDirection::ALL
            .into_iter()
            .filter(|direction| view.map.contains(here.step(*direction)))
            .collect();
        let unseen: Vec<CardinalDirection> = open
            .iter()
            .copied()
            .filter(|direction| !view.map.is_revealed(here.step(*direction)))
            .collect();

        let choices = if unseen.is_empty() { &open } else { &unseen };
        match choices.len() {
            0 => PlayerAction::Move(CardinalDirection::North),
            len => PlayerAction::Move(choices[self.rng.pick_index(len)]),
        }
    }
}

impl ActionProvider for AutopilotProvider {
    fn provide_action(&mut self, view: &SessionView<'_>) -> Option<PlayerAction> {
        let action = match view.phase {
            Phase::Dead => return None,
            Phase::Fighting(enemy) => self.fight(view, enemy.stats().hp()),
            Phase::Shopping => self.shop(view),
            Phase::Exploring => self.explore(view),
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::FloorLayout;
    use game_core::{Item, ItemCatalog, POTION_NAME, ScriptedRng};

    use crate::Session;
    use crate::oracle::FloorMap;

    fn session(rows: &[&str]) -> Session<FloorMap, ScriptedRng> {
        let catalog = ItemCatalog::new(vec![Item::new(POTION_NAME, 25, "potion.png")]).unwrap();
        let map = FloorMap::new(vec![FloorLayout::from_rows("test", rows).unwrap()]).unwrap();
        Session::new(GameConfig::default(), catalog, map, ScriptedRng::default()).unwrap()
    }

    #[test]
    fn explores_towards_unrevealed_rooms() {
        let session = session(&["snn", "nnn", "nnf"]);
        let mut pilot = AutopilotProvider::new(3);
        for _ in 0..10 {
            let action = pilot.provide_action(&session.view()).unwrap();
            assert!(matches!(
                action,
                PlayerAction::Move(CardinalDirection::East)
                    | PlayerAction::Move(CardinalDirection::South)
            ));
        }
    }

    #[test]
    fn stops_when_the_hero_is_dead() {
        let session = session(&["s"]);
        let mut pilot = AutopilotProvider::new(3);
        let view = SessionView {
            phase: &Phase::Dead,
            ..session.view()
        };
        assert_eq!(pilot.provide_action(&view), None);
    }

    #[test]
    fn buys_once_per_visit_then_leaves() {
        let mut pilot = AutopilotProvider::new(1);
        let session = session(&["s"]);
        let mut rich = session.hero().clone();
        rich.collect_gold(100);
        let view = SessionView {
            hero: &rich,
            phase: &Phase::Shopping,
            ..session.view()
        };

        assert_eq!(pilot.provide_action(&view), Some(PlayerAction::BuyPotion));
        assert_eq!(pilot.provide_action(&view), Some(PlayerAction::LeaveShop));
        assert_eq!(pilot.provide_action(&view), Some(PlayerAction::BuyPotion));
    }
}
