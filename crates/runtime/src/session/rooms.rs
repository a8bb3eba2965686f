//! Room resolution: what happens when the hero arrives on a tile.

use game_core::{
    CardinalDirection, Combatant, GameConfig, Item, MapOracle, PickupOutcome, RngOracle, TileKind,
};

use super::{Phase, Session};
use crate::api::{ActionError, Result};
use crate::events::GameEvent;

/// How the hero reached the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Arrival {
    /// Walked or fled in; every room kind resolves.
    Walked,
    /// Came down the stairs; the shop and further stairs stay dormant.
    Descended,
}

impl<M: MapOracle, R: RngOracle> Session<M, R> {
    pub(super) fn walk(
        &mut self,
        direction: CardinalDirection,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        match self.phase {
            Phase::Exploring => {}
            Phase::Shopping => {
                self.phase = Phase::Exploring;
                events.push(GameEvent::ShopLeft);
            }
            Phase::Fighting(_) => return Err(ActionError::InCombat.into()),
            Phase::Dead => return Err(ActionError::HeroDead.into()),
        }

        let from = self.hero.position();
        if !self.hero.step(direction, self.map.dimensions()) {
            events.push(GameEvent::MoveBlocked { direction });
            return Ok(());
        }

        let to = self.hero.position();
        self.map.reveal(to);
        events.push(GameEvent::HeroMoved { from, to });
        self.enter_room(Arrival::Walked, events)
    }

    pub(super) fn enter_room(
        &mut self,
        arrival: Arrival,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let position = self.hero.position();
        let tile = self.map.tile(position).unwrap_or(TileKind::Empty);
        tracing::debug!("Entering {} room at {} ({:?})", tile, position, arrival);

        match (tile, arrival) {
            (TileKind::Exit, Arrival::Walked) => self.descend(events),
            (TileKind::Start, Arrival::Walked) => {
                self.phase = Phase::Shopping;
                events.push(GameEvent::ShopEntered);
                Ok(())
            }
            (TileKind::Item, _) => {
                self.item_room(events);
                Ok(())
            }
            (TileKind::Monster, _) => self.start_encounter(events),
            _ => Ok(()),
        }
    }

    /// Levels the hero up and loads the next floor, keeping the hero's
    /// coordinates. The room reached on the new floor is resolved immediately.
    fn descend(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        self.hero.level_up(self.config.level_up_hp);
        self.floor += 1;
        self.map.next_floor();

        if !self.map.contains(self.hero.position()) {
            if let Some(start) = self.map.start() {
                self.hero.place(start);
            }
        }
        self.map.reveal(self.hero.position());

        let stats = self.hero.stats();
        tracing::info!(
            "Descended to floor {}: hero level {}, {}/{} HP",
            self.floor,
            stats.level(),
            stats.hp(),
            stats.max_hp()
        );
        events.push(GameEvent::FloorDescended {
            floor: self.floor,
            level: stats.level(),
            max_hp: stats.max_hp(),
        });

        self.enter_room(Arrival::Descended, events)
    }

    /// Draws an item for the hero if a slot is free; a full inventory leaves
    /// the room untouched.
    fn item_room(&mut self, events: &mut Vec<GameEvent>) {
        let position = self.hero.position();
        if self.hero.inventory().len() >= GameConfig::MAX_INVENTORY_SLOTS {
            events.push(GameEvent::ItemLeftBehind { position });
            return;
        }

        let item = self.catalog.generate_item(&mut self.rng);
        if self.offer_item(item, events) {
            self.map.clear_tile(position);
        }
    }

    /// Hands `item` to the hero, reporting the outcome. Returns whether the
    /// hero took it.
    pub(super) fn offer_item(&mut self, item: Item, events: &mut Vec<GameEvent>) -> bool {
        let name = item.name().to_owned();
        match self.hero.pick_up_item(item.clone()) {
            PickupOutcome::Stored => {
                tracing::debug!("Picked up {}", name);
                events.push(GameEvent::ItemPickedUp { item });
                true
            }
            PickupOutcome::GoldCredited(amount) => {
                events.push(GameEvent::GoldCollected {
                    amount,
                    total: self.hero.gold(),
                });
                true
            }
            PickupOutcome::NoSpace(_) => {
                tracing::debug!("No room for {}", name);
                events.push(GameEvent::ItemLeftBehind {
                    position: self.hero.position(),
                });
                false
            }
        }
    }
}
