//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core (generation, inventory, oracles) and rejected
//! player actions so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, GenerationError, InventoryError, OracleError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("session requires at least one floor layout")]
    NoFloors,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Action(err) => err.severity(),
            RuntimeError::Oracle(err) => err.severity(),
            RuntimeError::Generation(err) => err.severity(),
            RuntimeError::Inventory(err) => err.severity(),
            RuntimeError::NoFloors => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Action(err) => err.error_code(),
            RuntimeError::Oracle(err) => err.error_code(),
            RuntimeError::Generation(err) => err.error_code(),
            RuntimeError::Inventory(err) => err.error_code(),
            RuntimeError::NoFloors => "RUNTIME_NO_FLOORS",
        }
    }
}

/// A player action that is not legal in the current session phase.
///
/// Rejected actions leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the hero is dead")]
    HeroDead,

    #[error("cannot do that while fighting")]
    InCombat,

    #[error("there is nothing to fight")]
    NotInCombat,

    #[error("the hero is not in a shop")]
    NotInShop,

    #[error("the hero has no potion")]
    NoPotion,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::NoPotion => ErrorSeverity::Recoverable,
            ActionError::HeroDead
            | ActionError::InCombat
            | ActionError::NotInCombat
            | ActionError::NotInShop => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::HeroDead => "ACTION_HERO_DEAD",
            ActionError::InCombat => "ACTION_IN_COMBAT",
            ActionError::NotInCombat => "ACTION_NOT_IN_COMBAT",
            ActionError::NotInShop => "ACTION_NOT_IN_SHOP",
            ActionError::NoPotion => "ACTION_NO_POTION",
        }
    }
}
