use super::{Combatant, Enemy};
use crate::combat::{AttackKind, AttackReport, Strike, warlock_band};
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::stats::StatBlock;

/// Modifier applied by one decorator layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecoratorKind {
    /// +2 max HP, one extra physical roll.
    Warrior,
    /// +1 max HP, one extra roll from a weighted d100 band.
    Warlock,
}

impl DecoratorKind {
    /// Suffix appended to the display name once per layer.
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub const fn hp_bonus(self) -> u32 {
        match self {
            DecoratorKind::Warrior => 2,
            DecoratorKind::Warlock => 1,
        }
    }

    /// Rolls this layer's contribution to an attack at `level`.
    pub fn roll_layer(self, rng: &mut dyn RngOracle, level: u32) -> Strike {
        let kind = match self {
            DecoratorKind::Warrior => AttackKind::Physical,
            DecoratorKind::Warlock => warlock_band(rng.roll_d100()),
        };
        Strike::new(kind, kind.roll(rng, level))
    }
}

/// Errors raised while building a decorator chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("cannot wrap a {existing} chain in a {requested} layer")]
    MixedKinds {
        existing: DecoratorKind,
        requested: DecoratorKind,
    },
}

impl GameError for ChainError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ChainError::MixedKinds { .. } => "CHAIN_MIXED_KINDS",
        }
    }
}

/// Display name of a chain `layers` deep: the species name followed by the
/// kind label once per layer.
///
/// `decorated_name("Orc", Warrior, 2)` is `"Orc Warrior Warrior"`.
pub fn decorated_name(species: &str, kind: DecoratorKind, layers: u32) -> String {
    let label = kind.label();
    let mut name = String::with_capacity(species.len() + (label.len() + 1) * layers as usize);
    name.push_str(species);
    for _ in 0..layers {
        name.push(' ');
        name.push_str(label);
    }
    name
}

/// One decorator layer owning the enemy it wraps.
///
/// The layer carries its own [`StatBlock`]: name from [`decorated_name`], quip
/// and level copied from the wrapped enemy, max HP raised by the kind's bonus,
/// and full HP at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decorated {
    stats: StatBlock,
    kind: DecoratorKind,
    depth: u32,
    inner: Box<Enemy>,
}

impl Decorated {
    pub(super) fn wrap(inner: Enemy, kind: DecoratorKind) -> Self {
        let depth = inner.depth() + 1;
        let wrapped = inner.stats();
        let stats = StatBlock::new(
            decorated_name(inner.species().as_ref(), kind, depth),
            wrapped.quip(),
            wrapped.level(),
            wrapped.max_hp().saturating_add(kind.hp_bonus()),
        );
        Self {
            stats,
            kind,
            depth,
            inner: Box::new(inner),
        }
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub(super) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    pub fn kind(&self) -> DecoratorKind {
        self.kind
    }

    /// Layers from the base up to and including this one.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn inner(&self) -> &Enemy {
        &self.inner
    }

    pub(super) fn into_inner(self) -> Enemy {
        *self.inner
    }

    /// Lets the wrapped enemy attack first, then adds this layer's own roll.
    pub(super) fn strike(
        &self,
        target: &mut dyn Combatant,
        rng: &mut dyn RngOracle,
    ) -> AttackReport {
        let mut report = self.inner.strike(target, rng);
        let strike = self.kind.roll_layer(rng, self.stats.level());
        target.take_damage(strike.damage);
        report.push(strike);
        report
    }
}
