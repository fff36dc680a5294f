//! Ability detail entity.

use serde::{Deserialize, Serialize};

/// Detailed information about an ability.
///
/// Cached under both its numeric id and its English name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityDetail {
    /// Ability id.
    pub id: u32,
    /// English name, kebab-case ("static", "solar-power").
    pub name: String,
    /// Japanese name, when available.
    pub name_ja: Option<String>,
    /// Effect description.
    pub effect: String,
    /// In-game flavor text.
    pub flavor_text: Option<String>,
    /// Whether this is a hidden ability on its bearer.
    pub is_hidden: bool,
}

impl AbilityDetail {
    /// Display name with each word capitalized ("solar-power" -> "Solar Power").
    pub fn display_name(&self) -> String {
        capitalize_kebab(&self.name)
    }
}

impl PartialEq for AbilityDetail {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AbilityDetail {}

pub(crate) fn capitalize_kebab(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
