//! Turn-by-turn game loop.
//!
//! A [`Session`] owns the hero, the live floor map, the item catalog and the
//! random source. Each call to [`Session::step`] resolves one [`PlayerAction`]
//! completely and returns the [`GameEvent`]s it produced. A rejected action
//! returns an error and leaves the session exactly as it was.
//!
//! Modules are organized by responsibility:
//! - `rooms` resolves the room the hero walks into, including floor descent
//! - `combat` runs fight rounds, fleeing and loot
//! - `shop` handles potion purchases and item sales

mod action;
mod combat;
mod phase;
mod rooms;
mod shop;
mod view;

pub use action::PlayerAction;
pub use phase::Phase;
pub use view::SessionView;

use game_content::FloorLayout;
use game_core::{
    Combatant, GameConfig, Hero, ItemCatalog, MapOracle, OracleError, PcgRng, RngOracle,
    compute_seed,
};

use crate::api::{ActionError, ActionProvider, Result, RuntimeError};
use crate::events::{GameEvent, HealthThreshold, hp_percent};
use crate::oracle::FloorMap;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    HeroDied,
    /// The provider had no further action.
    ProviderFinished,
    StepLimit,
}

/// Totals reported by [`Session::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Actions the session accepted.
    pub steps: u64,
    /// Actions rejected as illegal for the phase they were sent in.
    pub rejected: u64,
    pub reason: StopReason,
}

/// One game from the first floor until the hero dies.
pub struct Session<M = FloorMap, R = PcgRng> {
    config: GameConfig,
    catalog: ItemCatalog,
    map: M,
    rng: R,
    hero: Hero,
    phase: Phase,
    floor: u32,
    turns: u64,
}

impl Session<FloorMap, PcgRng> {
    /// Builds a session over loaded content with a seeded generator.
    pub fn from_content(
        config: GameConfig,
        catalog: ItemCatalog,
        layouts: Vec<FloorLayout>,
        seed: u64,
    ) -> Result<Self> {
        let map = FloorMap::new(layouts)?;
        tracing::debug!("Floor rotation holds {} layouts", map.layout_count());
        let rng = PcgRng::new(compute_seed(seed, 0, 0));
        Self::new(config, catalog, map, rng)
    }
}

impl<M: MapOracle, R: RngOracle> Session<M, R> {
    /// Places a fresh hero on the map's start tile and reveals it.
    pub fn new(config: GameConfig, catalog: ItemCatalog, mut map: M, rng: R) -> Result<Self> {
        let start = map.start().ok_or(OracleError::StartNotFound)?;
        map.reveal(start);
        let hero = Hero::new(&config, start);

        tracing::info!(
            "Session started: hero {} at {} with {} HP and {} gold",
            hero.stats().name(),
            start,
            hero.stats().hp(),
            hero.gold()
        );

        Ok(Self {
            config,
            catalog,
            map,
            rng,
            hero,
            phase: Phase::Exploring,
            floor: 1,
            turns: 0,
        })
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Floors reached so far, starting at 1.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Accepted actions so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            hero: &self.hero,
            phase: &self.phase,
            map: &self.map,
            config: &self.config,
            floor: self.floor,
        }
    }

    /// Resolves one player action.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Action`] if the action is not legal in the
    /// current phase, and [`RuntimeError::Inventory`] for an empty sell slot.
    /// In both cases nothing changed.
    pub fn step(&mut self, action: PlayerAction) -> Result<Vec<GameEvent>> {
        self.check_phase(&action)?;

        tracing::debug!("Turn {}: {:?} while {}", self.turns, action, self.phase.name());

        let before = self.health_threshold();
        let mut events = Vec::new();

        match action {
            PlayerAction::Move(direction) => self.walk(direction, &mut events)?,
            PlayerAction::Attack => self.fight_round(combat::HeroMove::Attack, &mut events)?,
            PlayerAction::Cast(spell) => {
                self.fight_round(combat::HeroMove::Cast(spell), &mut events)?
            }
            PlayerAction::DrinkPotion => {
                self.fight_round(combat::HeroMove::Potion, &mut events)?
            }
            PlayerAction::Flee => self.flee(&mut events)?,
            PlayerAction::BuyPotion => self.buy_potion(&mut events)?,
            PlayerAction::Sell(index) => self.sell_at(index, &mut events)?,
            PlayerAction::SellNamed(name) => self.sell_named(&name, &mut events)?,
            PlayerAction::LeaveShop => self.leave_shop(&mut events)?,
        }

        self.turns += 1;
        self.report_health(before, &mut events);
        Ok(events)
    }

    /// Drives the session with `provider` until the hero dies, the provider
    /// stops, or `max_steps` actions have been accepted.
    ///
    /// Rejected actions are logged and counted, never fatal; any other error
    /// is returned.
    pub fn run<F>(
        &mut self,
        provider: &mut dyn ActionProvider,
        max_steps: u64,
        mut on_event: F,
    ) -> Result<RunSummary>
    where
        F: FnMut(&GameEvent),
    {
        let mut steps = 0;
        let mut rejected = 0;

        let reason = loop {
            if self.is_over() {
                break StopReason::HeroDied;
            }
            if steps >= max_steps {
                break StopReason::StepLimit;
            }
            let Some(action) = provider.provide_action(&self.view()) else {
                break StopReason::ProviderFinished;
            };

            match self.step(action.clone()) {
                Ok(events) => {
                    steps += 1;
                    events.iter().for_each(&mut on_event);
                }
                Err(RuntimeError::Action(err)) => {
                    rejected += 1;
                    tracing::warn!("Rejected {:?}: {}", action, err);
                    if rejected > max_steps {
                        break StopReason::StepLimit;
                    }
                }
                Err(err) => return Err(err),
            }
        };

        tracing::info!(
            "Run stopped ({:?}) after {} steps, {} rejected",
            reason,
            steps,
            rejected
        );

        Ok(RunSummary {
            steps,
            rejected,
            reason,
        })
    }

    /// Rejects actions that do not belong to the current phase.
    fn check_phase(&self, action: &PlayerAction) -> Result<()> {
        let rejection = match &self.phase {
            Phase::Dead => Some(ActionError::HeroDead),
            Phase::Fighting(_) if !action.is_combat() => Some(ActionError::InCombat),
            Phase::Exploring | Phase::Shopping if action.is_combat() => {
                Some(ActionError::NotInCombat)
            }
            Phase::Exploring if action.is_shop() => Some(ActionError::NotInShop),
            _ => None,
        };
        match rejection {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn health_threshold(&self) -> HealthThreshold {
        let stats = self.hero.stats();
        HealthThreshold::from_hp(stats.hp(), stats.max_hp())
    }

    fn report_health(&self, before: HealthThreshold, events: &mut Vec<GameEvent>) {
        let after = self.health_threshold();
        if after != before {
            let stats = self.hero.stats();
            events.push(GameEvent::HealthThresholdCrossed {
                threshold: after,
                hp_percent: hp_percent(stats.hp(), stats.max_hp()),
            });
        }
    }

    fn die(&mut self, events: &mut Vec<GameEvent>) {
        let level = self.hero.stats().level();
        tracing::info!("Hero died on floor {} at level {}", self.floor, level);
        self.phase = Phase::Dead;
        events.push(GameEvent::HeroDied {
            floor: self.floor,
            level,
        });
    }
}
