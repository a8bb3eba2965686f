//! Abstraction for sourcing the hero's next action.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a session can
//! run with human input, scripted fixtures, or an autopilot policy.
use std::collections::VecDeque;

use crate::session::{PlayerAction, SessionView};

/// Trait for providing actions based on the current session state.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Autopilot decisions
/// - Scripted/replayed actions
pub trait ActionProvider {
    /// Chooses the next action, or `None` to stop driving the session.
    fn provide_action(&mut self, view: &SessionView<'_>) -> Option<PlayerAction>;
}

/// Replays a fixed list of actions, then stops.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<PlayerAction>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, _view: &SessionView<'_>) -> Option<PlayerAction> {
        self.actions.pop_front()
    }
}
