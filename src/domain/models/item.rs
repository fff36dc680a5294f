//! Item entity.

use serde::{Deserialize, Serialize};

/// An item (held item, berry, machine, ...), cached by id and name and
/// as part of a full catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    /// Item id.
    pub id: u32,
    /// English name, kebab-case ("choice-scarf").
    pub name: String,
    /// Japanese name, when available.
    pub name_ja: Option<String>,
    /// Category ("held-item", "berry", "mega-stone", ...).
    pub category: String,
    /// Effect description.
    pub description: Option<String>,
}

impl PartialEq for ItemEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ItemEntity {}
