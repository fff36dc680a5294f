//! The concurrent cache family.
//!
//! Each cache instance is its own unit of mutual exclusion: operations
//! on one instance serialize against each other, no guarantee exists
//! across instances. None of these caches perform I/O; populating them
//! on a repository miss is the caller's job, done without holding any
//! cache internals across the await (see `application::PokedexService`).

pub mod dual;
pub mod keyed;
pub mod move_cache;

pub use dual::{DualKeyed, DualKeyedCache};
pub use keyed::KeyedCache;
pub use move_cache::MoveCache;

use crate::domain::models::{
    AbilityDetail, ItemEntity, PokemonForm, PokemonLocation, TypeDetail,
};

/// Request queue depth per cache worker.
pub(crate) const CHANNEL_CAPACITY: usize = 64;

/// Ability details by id and name.
pub type AbilityCache = DualKeyedCache<AbilityDetail>;

/// Items by id and name, plus the full catalog listing.
pub type ItemCache = DualKeyedCache<ItemEntity>;

/// Type details by type name.
pub type TypeCache = KeyedCache<String, TypeDetail>;

/// Form listings by Pokemon id.
pub type FormCache = KeyedCache<u32, Vec<PokemonForm>>;

/// Encounter listings by Pokemon id.
pub type LocationCache = KeyedCache<u32, Vec<PokemonLocation>>;

impl DualKeyed for AbilityDetail {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl DualKeyed for ItemEntity {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
