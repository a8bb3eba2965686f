//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the session loop can stay focused on game rules.

pub mod errors;
pub mod providers;

pub use errors::{ActionError, Result, RuntimeError};
pub use providers::{ActionProvider, ScriptedProvider};
