//! Actors: the hero and every adversary.
//!
//! All actors share the [`Combatant`] contract. An attack resolves as a list of
//! strikes, each applied to the target through [`Combatant::take_damage`]
//! before the attack returns, so the target observes one HP change per strike.

mod decorator;
mod enemy;
mod hero;

pub use decorator::{ChainError, Decorated, DecoratorKind, decorated_name};
pub use enemy::{BaseEnemy, Enemy, Species};
pub use hero::{Hero, PickupOutcome, RemoveOutcome};

use crate::combat::{AttackReport, Side, TurnSummary};
use crate::env::RngOracle;
use crate::stats::StatBlock;

/// Polymorphic attack contract shared by the hero and all adversaries.
pub trait Combatant {
    fn stats(&self) -> &StatBlock;

    fn stats_mut(&mut self) -> &mut StatBlock;

    /// Which side of a fight this actor fights on.
    fn side(&self) -> Side;

    /// Resolves one attack against `target`.
    ///
    /// Every strike in the returned report has already been applied to
    /// `target` via `take_damage`, in report order.
    fn strike(&self, target: &mut dyn Combatant, rng: &mut dyn RngOracle) -> AttackReport;

    /// Resolves one attack and returns the total damage dealt.
    fn attack(&self, target: &mut dyn Combatant, rng: &mut dyn RngOracle) -> u32 {
        self.strike(target, rng).total()
    }

    /// Performs exactly one attack and summarises it for display.
    fn combat_turn(&self, target: &mut dyn Combatant, rng: &mut dyn RngOracle) -> TurnSummary {
        TurnSummary::new(self.side(), self.strike(target, rng))
    }

    fn take_damage(&mut self, amount: u32) {
        self.stats_mut().take_damage(amount);
    }

    fn heal(&mut self, amount: u32) {
        self.stats_mut().heal(amount);
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }
}
