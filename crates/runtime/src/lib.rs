//! Runtime orchestration for the dungeon crawler.
//!
//! This crate wires the pure rules in `game-core` to loaded content and a
//! player. Consumers build a [`Session`] and either feed it [`PlayerAction`]s
//! one at a time or hand it an [`ActionProvider`] to [`Session::run`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the turn loop and room resolution
//! - [`api`] exposes the error and provider types clients interact with
//! - [`events`] defines what a step reports back
//! - [`oracle`] provides the concrete floor map
//! - [`providers`] ships the autopilot policy
pub mod api;
pub mod events;
pub mod oracle;
pub mod providers;
pub mod session;

pub use api::{ActionError, ActionProvider, Result, RuntimeError, ScriptedProvider};
pub use events::{GameEvent, HealthThreshold, PurchaseRefusal, SaleRefusal};
pub use oracle::FloorMap;
pub use providers::{AutopilotConfig, AutopilotProvider};
pub use session::{Phase, PlayerAction, RunSummary, Session, SessionView, StopReason};
