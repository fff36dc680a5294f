//! Move entities and learn-method records.

use serde::{Deserialize, Serialize};

use super::pokemon::PokemonType;

/// A move. Equality is by id so listings can be deduplicated cheaply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveEntity {
    /// Move id.
    pub id: u32,
    /// English name, kebab-case ("thunderbolt").
    pub name: String,
    /// Japanese name, when available.
    pub name_ja: Option<String>,
    /// Move type.
    pub move_type: PokemonType,
    /// Base power; `None` for status moves.
    pub power: Option<u32>,
    /// Accuracy percentage; `None` for moves that never miss.
    pub accuracy: Option<u32>,
    /// Power points.
    pub pp: Option<u32>,
    /// Damage class ("physical", "special", "status").
    pub damage_class: String,
    /// Priority bracket (-7 to +5).
    pub priority: i8,
}

impl MoveEntity {
    /// Display text for power; "-" for status moves.
    pub fn display_power(&self) -> String {
        self.power.map_or_else(|| "-".to_string(), |p| p.to_string())
    }
}

impl PartialEq for MoveEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MoveEntity {}

/// How a move is acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LearnMethod {
    /// Learned by leveling up.
    LevelUp { level: u32 },
    /// Taught by a TM/TR/HM ("TM24", "TR08").
    Machine { number: String },
    /// Hatched knowing the move.
    Egg,
    /// Taught by a move tutor.
    Tutor,
    /// Learned upon evolving.
    Evolution,
    /// Learned on form change.
    FormChange,
}

impl LearnMethod {
    /// Short display label ("Lv.36", "TM24", "Egg", ...).
    pub fn display_label(&self) -> String {
        match self {
            Self::LevelUp { level } => format!("Lv.{level}"),
            Self::Machine { number } => number.clone(),
            Self::Egg => "Egg".to_string(),
            Self::Tutor => "Tutor".to_string(),
            Self::Evolution => "Evolution".to_string(),
            Self::FormChange => "Form change".to_string(),
        }
    }
}

/// One way a specific Pokemon learns a specific move, scoped to a
/// version group (the same pair can resolve differently per group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnMethod {
    /// The move being learned.
    #[serde(rename = "move")]
    pub mv: MoveEntity,
    /// How it is learned.
    pub method: LearnMethod,
    /// Version group the record is valid for ("scarlet-violet").
    pub version_group: String,
}

/// Set combinator for multi-move filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Subject must learn every selected move.
    #[default]
    And,
    /// Subject must learn at least one selected move.
    Or,
}
