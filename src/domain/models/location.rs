//! Encounter location entity.

use serde::{Deserialize, Serialize};

/// A place where a Pokemon can be encountered. Locations for one Pokemon
/// are cached as an ordered listing under the Pokemon id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonLocation {
    /// Location area id.
    pub id: u32,
    /// Id of the Pokemon encountered there.
    pub pokemon_id: u32,
    /// Area name ("kanto-route-2-south-towards-viridian-city").
    pub location_name: String,
    /// Region the area belongs to.
    pub region: Option<String>,
    /// Game versions the encounter applies to.
    pub games: Vec<String>,
}
