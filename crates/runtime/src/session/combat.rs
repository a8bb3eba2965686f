//! Fight rounds, fleeing and loot.

use game_core::{CardinalDirection, Combatant, Enemy, EnemyGenerator, MapOracle, RngOracle, Spell};

use super::rooms::Arrival;
use super::{Phase, Session};
use crate::api::{ActionError, Result};
use crate::events::GameEvent;

/// The hero's half of a fight round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HeroMove {
    Attack,
    Cast(Spell),
    Potion,
}

impl<M: MapOracle, R: RngOracle> Session<M, R> {
    /// Generates an enemy at the hero's level and lets it strike first.
    pub(super) fn start_encounter(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let level = self.hero.stats().level();
        let enemy = EnemyGenerator::new(&self.catalog).generate_enemy(level, &mut self.rng)?;

        tracing::info!(
            "Encounter: {} (level {}, {} HP, {} layers)",
            enemy.stats().name(),
            enemy.stats().level(),
            enemy.stats().max_hp(),
            enemy.depth()
        );
        events.push(GameEvent::EncounterStarted {
            name: enemy.stats().name().to_owned(),
            level: enemy.stats().level(),
            max_hp: enemy.stats().max_hp(),
            depth: enemy.depth(),
            modifier: enemy.modifier(),
        });

        self.enemy_turn(&enemy, events);
        self.settle_fight(enemy, events);
        Ok(())
    }

    /// Hero acts, the enemy answers if it is still standing, then the fight
    /// is checked for an end.
    pub(super) fn fight_round(
        &mut self,
        hero_move: HeroMove,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        if !matches!(self.phase, Phase::Fighting(_)) {
            return Err(ActionError::NotInCombat.into());
        }
        if hero_move == HeroMove::Potion && !self.hero.has_potion() {
            return Err(ActionError::NoPotion.into());
        }
        let mut enemy = self.take_enemy()?;

        match hero_move {
            HeroMove::Attack => {
                let summary = self.hero.combat_turn(&mut enemy, &mut self.rng);
                tracing::debug!("{}", summary);
                events.push(GameEvent::HeroAttacked {
                    summary,
                    enemy_hp: enemy.stats().hp(),
                });
            }
            HeroMove::Cast(spell) => {
                let strike = self.hero.cast_at(spell, &mut enemy, &mut self.rng);
                tracing::debug!("Cast {} for {} damage", spell, strike.damage);
                events.push(GameEvent::SpellCast {
                    spell,
                    damage: strike.damage,
                    enemy_hp: enemy.stats().hp(),
                });
            }
            HeroMove::Potion => {
                self.hero.drink_potion(self.config.potion_heal);
                events.push(GameEvent::PotionConsumed {
                    hp: self.hero.stats().hp(),
                });
            }
        }

        if enemy.is_alive() {
            self.enemy_turn(&enemy, events);
        }
        self.settle_fight(enemy, events);
        Ok(())
    }

    /// Runs to a uniformly chosen in-bounds neighbour and resolves that room.
    pub(super) fn flee(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let enemy = self.take_enemy()?;
        let from = self.hero.position();
        let dimensions = self.map.dimensions();
        let exits: Vec<CardinalDirection> = CardinalDirection::ALL
            .into_iter()
            .filter(|direction| dimensions.contains(from.step(*direction)))
            .collect();

        if !exits.is_empty() {
            let direction = exits[self.rng.pick_index(exits.len())];
            self.hero.step(direction, dimensions);
        }
        let to = self.hero.position();

        tracing::info!("Fled from {} at {} to {}", enemy.stats().name(), from, to);
        self.phase = Phase::Exploring;
        self.map.reveal(to);
        events.push(GameEvent::Fled { from, to });
        self.enter_room(Arrival::Walked, events)
    }

    fn enemy_turn(&mut self, enemy: &Enemy, events: &mut Vec<GameEvent>) {
        let summary = enemy.combat_turn(&mut self.hero, &mut self.rng);
        tracing::debug!("{}", summary);
        events.push(GameEvent::EnemyAttacked {
            summary,
            hero_hp: self.hero.stats().hp(),
        });
    }

    /// Ends the fight if either side is down; otherwise keeps it going.
    ///
    /// A defeated enemy drops its reward. If the hero takes it the room is
    /// cleared, otherwise the room becomes an item room.
    fn settle_fight(&mut self, enemy: Enemy, events: &mut Vec<GameEvent>) {
        if !self.hero.is_alive() {
            self.die(events);
            return;
        }
        if enemy.is_alive() {
            self.phase = Phase::Fighting(enemy);
            return;
        }

        tracing::info!("Defeated {}", enemy.stats().name());
        events.push(GameEvent::EnemyDefeated {
            name: enemy.stats().name().to_owned(),
        });
        self.phase = Phase::Exploring;

        let position = self.hero.position();
        if self.offer_item(enemy.into_reward(), events) {
            self.map.clear_tile(position);
        } else {
            self.map.mark_item_tile(position);
        }
    }

    fn take_enemy(&mut self) -> Result<Enemy> {
        match std::mem::replace(&mut self.phase, Phase::Exploring) {
            Phase::Fighting(enemy) => Ok(enemy),
            other => {
                self.phase = other;
                Err(ActionError::NotInCombat.into())
            }
        }
    }
}
