//! Pokemon entity, the subject identity for list filtering.

use serde::{Deserialize, Serialize};

/// A type slot on a Pokemon or form (up to two per entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Slot number (1 or 2).
    pub slot: u8,
    /// Type name in kebab-case ("electric", "water", ...).
    pub name: String,
}

impl PokemonType {
    pub fn new(slot: u8, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
        }
    }
}

/// A Pokemon as seen by this layer: the identity the caches and the
/// move filter key on, plus the fields list rows need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number, unique.
    pub id: u32,
    /// English name, lowercase kebab-case.
    pub name: String,
    /// Types (at most two).
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    pub fn new(id: u32, name: impl Into<String>, types: Vec<PokemonType>) -> Self {
        Self {
            id,
            name: name.into(),
            types,
        }
    }
}

impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pokemon {}
