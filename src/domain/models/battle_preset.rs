//! Battle configuration presets persisted by the preset store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Singles or doubles battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleMode {
    #[default]
    Single,
    Double,
}

/// One side of a battle configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleParticipant {
    /// Selected Pokemon, if any.
    pub pokemon_id: Option<u32>,
    /// Level, defaulting to 50 in the calculator UI.
    pub level: Option<u32>,
    /// Held item.
    pub item_id: Option<u32>,
    /// Active ability.
    pub ability_id: Option<u32>,
    /// Tera type name, when terastallized.
    pub tera_type: Option<String>,
}

/// Field conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEnvironment {
    /// Active weather ("rain", "sun", ...).
    pub weather: Option<String>,
    /// Active terrain ("electric", "grassy", ...).
    pub terrain: Option<String>,
}

/// A full battle calculator configuration. Opaque to the preset store:
/// it is stored and round-tripped, never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub mode: BattleMode,
    pub attacker: BattleParticipant,
    pub defender: BattleParticipant,
    pub environment: BattleEnvironment,
    /// Selected move, if any.
    pub selected_move_id: Option<u32>,
    /// Whether accuracy is factored into expected damage.
    pub apply_accuracy: bool,
}

/// A named, persisted battle configuration.
///
/// Identity is `id`; names are not unique. `created_at` is immutable,
/// `updated_at` moves forward on every [`BattlePreset::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePreset {
    pub id: Uuid,
    pub name: String,
    pub battle_state: BattleState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BattlePreset {
    /// Create a new preset; both timestamps start at the creation instant.
    pub fn new(name: impl Into<String>, battle_state: BattleState) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            battle_state,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename and/or replace the stored configuration, refreshing
    /// `updated_at`. Passing `None` leaves a field untouched.
    pub fn update(&mut self, name: Option<String>, battle_state: Option<BattleState>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(state) = battle_state {
            self.battle_state = state;
        }
        self.updated_at = Utc::now();
    }
}
