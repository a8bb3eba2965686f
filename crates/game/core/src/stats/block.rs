/// Identity and HP/level bookkeeping for one actor.
///
/// # Invariants
///
/// - `max_hp >= 1`
/// - `0 <= hp <= max_hp` after every mutation
///
/// A new block starts at full HP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    name: String,
    quip: String,
    level: u32,
    max_hp: u32,
    hp: u32,
}

impl StatBlock {
    /// Creates a block at full HP. `level` and `max_hp` are floored at 1.
    pub fn new(name: impl Into<String>, quip: impl Into<String>, level: u32, max_hp: u32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            quip: quip.into(),
            level: level.max(1),
            max_hp,
            hp: max_hp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quip(&self) -> &str {
        &self.quip
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restores HP, never past `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Removes HP, flooring at 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Raises the HP ceiling without touching current HP.
    pub fn increase_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_add(amount);
    }

    /// Lowers the HP ceiling, flooring it at 1.
    ///
    /// Current HP is re-clamped to the new ceiling so `hp <= max_hp` keeps holding.
    pub fn decrease_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_sub(amount).max(1);
        self.hp = self.hp.min(self.max_hp);
    }

    pub fn increase_level(&mut self) {
        self.level = self.level.saturating_add(1);
    }
}
