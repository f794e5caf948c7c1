/// Battle snapshot a caller builds fresh for every evaluation tick.
///
/// The evaluator never keeps it. One-shot fields (`kills`,
/// `is_fatal_damage`, the last-action flags) are reset by the battle loop
/// between ticks that should not re-trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleContext {
    pub current_hp: u32,
    pub max_hp: u32,
    pub turn: u32,
    pub combo_count: u32,
    pub damage_taken: u32,
    pub kills: u32,
    /// Elapsed battle time in seconds.
    pub battle_time: u32,
    pub last_action_was_skill: bool,
    pub last_action_was_dodge: bool,
    pub is_fatal_damage: bool,
}

impl BattleContext {
    /// Full-health snapshot at the start of a battle.
    pub fn new(max_hp: u32) -> Self {
        Self {
            current_hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }

    /// Current HP as a percentage of max HP. Zero when `max_hp` is zero.
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) * 100.0 / f64::from(self.max_hp)
    }

    #[must_use]
    pub fn with_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = current_hp;
        self
    }

    #[must_use]
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    #[must_use]
    pub fn with_combo(mut self, combo_count: u32) -> Self {
        self.combo_count = combo_count;
        self
    }

    #[must_use]
    pub fn with_damage_taken(mut self, damage_taken: u32) -> Self {
        self.damage_taken = damage_taken;
        self
    }

    #[must_use]
    pub fn with_kills(mut self, kills: u32) -> Self {
        self.kills = kills;
        self
    }

    #[must_use]
    pub fn with_battle_time(mut self, seconds: u32) -> Self {
        self.battle_time = seconds;
        self
    }

    #[must_use]
    pub fn with_skill(mut self) -> Self {
        self.last_action_was_skill = true;
        self
    }

    #[must_use]
    pub fn with_dodge(mut self) -> Self {
        self.last_action_was_dodge = true;
        self
    }

    #[must_use]
    pub fn with_fatal_damage(mut self) -> Self {
        self.is_fatal_damage = true;
        self
    }
}
