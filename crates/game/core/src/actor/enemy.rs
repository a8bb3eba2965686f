use super::{ChainError, Combatant, Decorated, DecoratorKind};
use crate::combat::{AttackKind, AttackReport, Side, Strike};
use crate::env::RngOracle;
use crate::state::Item;
use crate::stats::StatBlock;

/// The four undecorated adversary templates.
///
/// Species differ only in display data and their base max HP, which does not
/// scale with level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Orc,
    Troll,
    Goblin,
    Froglok,
}

impl Species {
    /// Draw order used by generation: index `n` of a uniform pick maps to `ALL[n]`.
    pub const ALL: [Species; 4] = [Species::Orc, Species::Troll, Species::Goblin, Species::Froglok];

    pub const fn quip(self) -> &'static str {
        match self {
            Species::Orc => "Blarghh",
            Species::Troll => "Ugh uh",
            Species::Goblin => "Ack Ack",
            Species::Froglok => "Croooak",
        }
    }

    pub const fn base_max_hp(self) -> u32 {
        match self {
            Species::Orc => 4,
            Species::Troll => 5,
            Species::Goblin => 2,
            Species::Froglok => 2,
        }
    }

    pub const fn image(self) -> &'static str {
        match self {
            Species::Orc => "./images/monsters/Orc.png",
            Species::Troll => "./images/monsters/Troll.png",
            Species::Goblin => "./images/monsters/Goblin.png",
            Species::Froglok => "./images/monsters/Frog.png",
        }
    }
}

/// Undecorated adversary holding its reward item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseEnemy {
    stats: StatBlock,
    species: Species,
    reward: Item,
}

impl BaseEnemy {
    pub fn new(species: Species, level: u32, reward: Item) -> Self {
        Self {
            stats: StatBlock::new(
                species.as_ref(),
                species.quip(),
                level,
                species.base_max_hp(),
            ),
            species,
            reward,
        }
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn reward(&self) -> &Item {
        &self.reward
    }
}

/// An adversary: a base species wrapped in zero or more decorator layers.
///
/// Each `Decorated` node exclusively owns the enemy it wraps. The outermost
/// node's stats are the ones reported and damaged; inner layers keep their own
/// HP untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Enemy {
    Base(BaseEnemy),
    Decorated(Decorated),
}

impl Enemy {
    /// Bare species at `level` holding `reward`.
    pub fn new(species: Species, level: u32, reward: Item) -> Self {
        Enemy::Base(BaseEnemy::new(species, level, reward))
    }

    /// Wraps this enemy in one more layer of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MixedKinds`] if the chain already carries layers of
    /// the other kind.
    pub fn decorate(self, kind: DecoratorKind) -> Result<Self, ChainError> {
        match self.modifier() {
            Some(existing) if existing != kind => Err(ChainError::MixedKinds {
                existing,
                requested: kind,
            }),
            _ => Ok(Enemy::Decorated(Decorated::wrap(self, kind))),
        }
    }

    /// Wraps this enemy in `layers` layers of `kind`.
    pub fn decorated(self, kind: DecoratorKind, layers: u32) -> Result<Self, ChainError> {
        (0..layers).try_fold(self, |enemy, _| enemy.decorate(kind))
    }

    /// Number of decorator layers around the base species.
    pub fn depth(&self) -> u32 {
        match self {
            Enemy::Base(_) => 0,
            Enemy::Decorated(layer) => layer.depth(),
        }
    }

    /// Kind shared by every layer, or `None` for a bare species.
    pub fn modifier(&self) -> Option<DecoratorKind> {
        match self {
            Enemy::Base(_) => None,
            Enemy::Decorated(layer) => Some(layer.kind()),
        }
    }

    /// The undecorated core of the chain.
    pub fn base(&self) -> &BaseEnemy {
        let mut current = self;
        loop {
            match current {
                Enemy::Base(base) => return base,
                Enemy::Decorated(layer) => current = layer.inner(),
            }
        }
    }

    pub fn species(&self) -> Species {
        self.base().species()
    }

    pub fn image(&self) -> &str {
        self.species().image()
    }

    pub fn reward(&self) -> &Item {
        self.base().reward()
    }

    /// Consumes the enemy, handing over its reward item.
    pub fn into_reward(self) -> Item {
        let mut current = self;
        loop {
            match current {
                Enemy::Base(base) => return base.reward,
                Enemy::Decorated(layer) => current = layer.into_inner(),
            }
        }
    }
}

impl Combatant for Enemy {
    fn stats(&self) -> &StatBlock {
        match self {
            Enemy::Base(base) => &base.stats,
            Enemy::Decorated(layer) => layer.stats(),
        }
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        match self {
            Enemy::Base(base) => &mut base.stats,
            Enemy::Decorated(layer) => layer.stats_mut(),
        }
    }

    fn side(&self) -> Side {
        Side::Enemy
    }

    fn strike(&self, target: &mut dyn Combatant, rng: &mut dyn RngOracle) -> AttackReport {
        match self {
            Enemy::Base(base) => {
                let damage = AttackKind::Physical.roll(rng, base.stats.level());
                target.take_damage(damage);
                AttackReport::single(Strike::new(AttackKind::Physical, damage))
            }
            Enemy::Decorated(layer) => layer.strike(target, rng),
        }
    }
}
