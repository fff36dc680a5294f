//! Domain entities for the Pokedex data layer.

pub mod ability;
pub mod battle_preset;
pub mod form;
pub mod item;
pub mod location;
pub mod moves;
pub mod poke_type;
pub mod pokemon;

pub use ability::AbilityDetail;
pub use battle_preset::{
    BattleEnvironment, BattleMode, BattleParticipant, BattlePreset, BattleState,
};
pub use form::PokemonForm;
pub use item::ItemEntity;
pub use location::PokemonLocation;
pub use moves::{FilterMode, LearnMethod, MoveEntity, MoveLearnMethod};
pub use poke_type::{TypeDetail, TypeRelations};
pub use pokemon::{Pokemon, PokemonType};
