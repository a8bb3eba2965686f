//! Level-scaled damage rolls.
//!
//! Every roll has the same shape: one uniform die draw multiplied by the
//! attacker's level. Only the die size differs between attack kinds.

use crate::env::RngOracle;

/// The four ways an attack can land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "title_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    /// Basic melee, d4.
    Physical,
    /// d5.
    MagicMissile,
    /// d6.
    Fireball,
    /// d7.
    Thunderclap,
}

impl AttackKind {
    pub const fn die_sides(self) -> u32 {
        match self {
            AttackKind::Physical => 4,
            AttackKind::MagicMissile => 5,
            AttackKind::Fireball => 6,
            AttackKind::Thunderclap => 7,
        }
    }

    /// `uniform(1..=sides) * level`.
    pub fn roll(self, rng: &mut dyn RngOracle, level: u32) -> u32 {
        rng.roll_die(self.die_sides()).saturating_mul(level)
    }
}

/// Spells the hero can cast outside the basic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "title_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spell {
    MagicMissile,
    Fireball,
    Thunderclap,
}

impl Spell {
    pub const ALL: [Spell; 3] = [Spell::MagicMissile, Spell::Fireball, Spell::Thunderclap];

    pub const fn attack_kind(self) -> AttackKind {
        match self {
            Spell::MagicMissile => AttackKind::MagicMissile,
            Spell::Fireball => AttackKind::Fireball,
            Spell::Thunderclap => AttackKind::Thunderclap,
        }
    }

    pub fn roll(self, rng: &mut dyn RngOracle, level: u32) -> u32 {
        self.attack_kind().roll(rng, level)
    }
}

/// Basic `(1..=4) * level` roll shared by the hero's melee and every enemy.
pub fn physical_roll(rng: &mut dyn RngOracle, level: u32) -> u32 {
    AttackKind::Physical.roll(rng, level)
}

/// Maps a d100 draw onto a warlock's attack band.
///
/// | draw | attack |
/// |---|---|
/// | 2..=40 | physical |
/// | 41..=70 | magic missile |
/// | 71..=90 | fireball |
/// | 91..=100, and 1 | thunderclap |
///
/// A draw of 1 is outside the physical band and falls through to thunderclap.
pub fn warlock_band(draw: u32) -> AttackKind {
    match draw {
        2..=40 => AttackKind::Physical,
        41..=70 => AttackKind::MagicMissile,
        71..=90 => AttackKind::Fireball,
        _ => AttackKind::Thunderclap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn rolls_scale_with_level() {
        let mut rng = ScriptedRng::new([3, 5, 6, 7]);
        assert_eq!(physical_roll(&mut rng, 2), 6);
        assert_eq!(Spell::MagicMissile.roll(&mut rng, 3), 15);
        assert_eq!(Spell::Fireball.roll(&mut rng, 1), 6);
        assert_eq!(Spell::Thunderclap.roll(&mut rng, 4), 28);
    }

    #[test]
    fn random_rolls_stay_within_die_bounds() {
        let mut rng = PcgRng::new(11);
        for kind in [
            AttackKind::Physical,
            AttackKind::MagicMissile,
            AttackKind::Fireball,
            AttackKind::Thunderclap,
        ] {
            for _ in 0..200 {
                let damage = kind.roll(&mut rng, 3);
                assert!(damage >= 3 && damage <= kind.die_sides() * 3);
                assert_eq!(damage % 3, 0);
            }
        }
    }

    #[test]
    fn warlock_band_boundaries() {
        assert_eq!(warlock_band(1), AttackKind::Thunderclap);
        assert_eq!(warlock_band(2), AttackKind::Physical);
        assert_eq!(warlock_band(40), AttackKind::Physical);
        assert_eq!(warlock_band(41), AttackKind::MagicMissile);
        assert_eq!(warlock_band(70), AttackKind::MagicMissile);
        assert_eq!(warlock_band(71), AttackKind::Fireball);
        assert_eq!(warlock_band(90), AttackKind::Fireball);
        assert_eq!(warlock_band(91), AttackKind::Thunderclap);
        assert_eq!(warlock_band(100), AttackKind::Thunderclap);
    }

    #[test]
    fn spell_names_render_in_title_case() {
        assert_eq!(Spell::MagicMissile.to_string(), "Magic Missile");
        assert_eq!(AttackKind::Physical.as_ref(), "Physical");
    }
}
