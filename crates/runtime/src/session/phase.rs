use game_core::Enemy;

/// What the hero is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    /// Locked in a fight with this enemy.
    Fighting(Enemy),
    Shopping,
    /// Terminal; every further action is rejected.
    Dead,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Exploring => "exploring",
            Phase::Fighting(_) => "fighting",
            Phase::Shopping => "shopping",
            Phase::Dead => "dead",
        }
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        match self {
            Phase::Fighting(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Dead)
    }
}
