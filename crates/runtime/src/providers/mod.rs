//! Built-in action providers.

mod autopilot;

pub use autopilot::{AutopilotConfig, AutopilotProvider};
