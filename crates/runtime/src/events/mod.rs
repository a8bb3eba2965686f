//! Events produced while a session runs.

mod game_event;

pub use game_event::{GameEvent, HealthThreshold, PurchaseRefusal, SaleRefusal, hp_percent};
