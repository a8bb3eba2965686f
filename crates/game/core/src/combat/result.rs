//! Attack outcomes and one-line turn summaries.

use std::fmt;

use super::AttackKind;

/// One `take_damage` call made against a target during an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub kind: AttackKind,
    pub damage: u32,
}

impl Strike {
    pub const fn new(kind: AttackKind, damage: u32) -> Self {
        Self { kind, damage }
    }
}

/// Every strike of one logical attack, innermost layer first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    strikes: Vec<Strike>,
}

impl AttackReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(strike: Strike) -> Self {
        Self {
            strikes: vec![strike],
        }
    }

    pub fn push(&mut self, strike: Strike) {
        self.strikes.push(strike);
    }

    pub fn strikes(&self) -> &[Strike] {
        &self.strikes
    }

    pub fn hits(&self) -> u32 {
        self.strikes.len() as u32
    }

    /// Sum of every strike; what the attack contract returns.
    pub fn total(&self) -> u32 {
        self.strikes
            .iter()
            .fold(0u32, |sum, strike| sum.saturating_add(strike.damage))
    }
}

/// Which side of the fight acted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Hero,
    Enemy,
}

/// Human-readable result of one `combat_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    pub side: Side,
    pub report: AttackReport,
}

impl TurnSummary {
    pub fn new(side: Side, report: AttackReport) -> Self {
        Self { side, report }
    }

    pub fn damage(&self) -> u32 {
        self.report.total()
    }

    pub fn hits(&self) -> u32 {
        self.report.hits()
    }
}

impl fmt::Display for TurnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Hero => write!(f, "You attack the enemy for {} damage.", self.damage()),
            Side::Enemy => {
                let hits = self.hits();
                let noun = if hits == 1 { "time" } else { "times" };
                write!(
                    f,
                    "The enemy hits you {hits} {noun} for {} damage.",
                    self.damage()
                )
            }
        }
    }
}
