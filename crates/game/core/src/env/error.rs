//! Oracle access errors.
//!
//! Errors related to world data that the core consumes but does not own.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors that occur when building or querying oracles.
///
/// Oracle errors indicate that required game data is unavailable or invalid.
/// These are typically fatal since a session cannot proceed without a catalog
/// to draw from or a floor to stand on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The item catalog has no templates to draw from.
    #[error("item catalog is empty")]
    EmptyCatalog,

    /// A floor layout has no start tile for the hero.
    #[error("floor has no start tile")]
    StartNotFound,

    /// Position is outside the map bounds.
    #[error("position {0} is out of map bounds")]
    PositionOutOfBounds(Position),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            EmptyCatalog | StartNotFound => ErrorSeverity::Fatal,
            PositionOutOfBounds(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EmptyCatalog => "ORACLE_EMPTY_CATALOG",
            StartNotFound => "ORACLE_START_NOT_FOUND",
            PositionOutOfBounds(_) => "ORACLE_POSITION_OUT_OF_BOUNDS",
        }
    }
}
