//! Pokemon form entity (regional forms, megas, form changes).

use serde::{Deserialize, Serialize};

use super::pokemon::PokemonType;

/// A single form of a Pokemon. Forms for one Pokemon are cached as an
/// ordered listing under the owning Pokemon id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    /// Form id.
    pub id: u32,
    /// Full name ("raichu-alola").
    pub name: String,
    /// Id of the Pokemon this form belongs to.
    pub pokemon_id: u32,
    /// Form discriminator ("normal", "alola", "mega-x", ...).
    pub form_name: String,
    /// Types for this form (may differ from the base form).
    pub types: Vec<PokemonType>,
    /// Whether this is the default form.
    pub is_default: bool,
    /// Mega evolution form.
    pub is_mega: bool,
    /// Regional variant form.
    pub is_regional: bool,
    /// Version group the form appears in, when restricted.
    pub version_group: Option<String>,
}
