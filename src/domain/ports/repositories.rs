//! Repository port traits (Hexagonal Architecture).
//!
//! These are the async data sources the caching layer sits in front of.
//! Implementations own transport, decoding, and not-found policy; this
//! layer treats them as opaque. Absence of a *cached* value is `None`,
//! but a repository asked for a specific entity it cannot produce fails
//! with [`DomainError::NotFound`](crate::domain::errors::DomainError).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AbilityDetail, ItemEntity, MoveEntity, MoveLearnMethod, PokemonForm, PokemonLocation,
    TypeDetail,
};

/// Source of ability details.
#[async_trait]
pub trait AbilityRepository: Send + Sync {
    async fn fetch_ability(&self, ability_id: u32) -> DomainResult<AbilityDetail>;

    async fn fetch_ability_by_name(&self, name: &str) -> DomainResult<AbilityDetail>;
}

/// Source of type details.
#[async_trait]
pub trait TypeRepository: Send + Sync {
    async fn fetch_type(&self, name: &str) -> DomainResult<TypeDetail>;
}

/// Source of per-Pokemon detail listings (forms, encounter locations).
#[async_trait]
pub trait PokemonDetailRepository: Send + Sync {
    /// Ordered form listing for a Pokemon.
    async fn fetch_forms(&self, pokemon_id: u32) -> DomainResult<Vec<PokemonForm>>;

    /// Ordered encounter listing for a Pokemon.
    async fn fetch_locations(&self, pokemon_id: u32) -> DomainResult<Vec<PokemonLocation>>;
}

/// Source of the item catalog.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// The full item listing, in catalog order.
    async fn fetch_all_items(&self) -> DomainResult<Vec<ItemEntity>>;
}

/// Source of moves and move learnability.
#[async_trait]
pub trait MoveRepository: Send + Sync {
    /// All moves, optionally restricted to one version group.
    async fn fetch_all_moves(&self, version_group: Option<&str>) -> DomainResult<Vec<MoveEntity>>;

    /// Resolve learn methods for every (pokemon, move) pair in one
    /// aggregate query, scoped to a version group.
    ///
    /// The result maps pokemon id to the learn methods that exist for
    /// that pokemon across the requested moves. A pokemon with no such
    /// methods may be absent from the map entirely.
    async fn fetch_bulk_learn_methods(
        &self,
        pokemon_ids: &[u32],
        move_ids: &[u32],
        version_group: &str,
    ) -> DomainResult<HashMap<u32, Vec<MoveLearnMethod>>>;
}
