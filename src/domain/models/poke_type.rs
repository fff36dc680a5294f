//! Type detail entity with damage relations.

use serde::{Deserialize, Serialize};

/// Damage relations for a single type, each list holding type names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    pub double_damage_from: Vec<String>,
    pub double_damage_to: Vec<String>,
    pub half_damage_from: Vec<String>,
    pub half_damage_to: Vec<String>,
    pub no_damage_from: Vec<String>,
    pub no_damage_to: Vec<String>,
}

/// Detailed information about a type, cached by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetail {
    /// Type name in kebab-case ("electric", "fighting").
    pub name: String,
    /// Japanese name, when available.
    pub name_ja: Option<String>,
    /// Offensive and defensive damage relations.
    pub relations: TypeRelations,
}

impl TypeDetail {
    /// Damage multiplier this type takes from an attacking type.
    pub fn multiplier_from(&self, attacking: &str) -> f64 {
        let r = &self.relations;
        if r.no_damage_from.iter().any(|t| t == attacking) {
            0.0
        } else if r.double_damage_from.iter().any(|t| t == attacking) {
            2.0
        } else if r.half_damage_from.iter().any(|t| t == attacking) {
            0.5
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_prefers_immunity() {
        let detail = TypeDetail {
            name: "ground".to_string(),
            name_ja: None,
            relations: TypeRelations {
                no_damage_from: vec!["electric".to_string()],
                double_damage_from: vec!["water".to_string()],
                ..TypeRelations::default()
            },
        };
        assert_eq!(detail.multiplier_from("electric"), 0.0);
        assert_eq!(detail.multiplier_from("water"), 2.0);
        assert_eq!(detail.multiplier_from("normal"), 1.0);
    }
}
