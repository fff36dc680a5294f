//! Cache-first lookup service and composition root for the cache family.
//!
//! Each lookup probes the matching cache, falls back to the repository
//! on a miss, populates the cache, and returns. Cache operations finish
//! before the repository await starts, so no cache is held across I/O
//! and concurrent callers are never blocked on network latency through
//! a cache instance. Repository failures propagate and cache nothing.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::cache::{
    AbilityCache, FormCache, ItemCache, LocationCache, MoveCache, TypeCache,
};
use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AbilityDetail, ItemEntity, MoveEntity, PokemonForm, PokemonLocation, TypeDetail,
};
use crate::domain::ports::{
    AbilityRepository, ItemRepository, MoveRepository, PokemonDetailRepository, TypeRepository,
};

/// Owns one instance of every cache and the repository handles behind
/// them. Construct once at startup and share; there is no global state.
pub struct PokedexService {
    ability_repo: Arc<dyn AbilityRepository>,
    type_repo: Arc<dyn TypeRepository>,
    detail_repo: Arc<dyn PokemonDetailRepository>,
    item_repo: Arc<dyn ItemRepository>,
    move_repo: Arc<dyn MoveRepository>,
    ability_cache: AbilityCache,
    type_cache: TypeCache,
    form_cache: FormCache,
    location_cache: LocationCache,
    item_cache: ItemCache,
    move_cache: MoveCache,
}

impl PokedexService {
    pub fn new(
        ability_repo: Arc<dyn AbilityRepository>,
        type_repo: Arc<dyn TypeRepository>,
        detail_repo: Arc<dyn PokemonDetailRepository>,
        item_repo: Arc<dyn ItemRepository>,
        move_repo: Arc<dyn MoveRepository>,
    ) -> Self {
        Self {
            ability_repo,
            type_repo,
            detail_repo,
            item_repo,
            move_repo,
            ability_cache: AbilityCache::new(),
            type_cache: TypeCache::new(),
            form_cache: FormCache::new(),
            location_cache: LocationCache::new(),
            item_cache: ItemCache::new(),
            move_cache: MoveCache::new(),
        }
    }

    pub async fn ability(&self, ability_id: u32) -> DomainResult<AbilityDetail> {
        if let Some(cached) = self.ability_cache.get_by_id(ability_id).await {
            return Ok(cached);
        }

        debug!(ability_id, "ability cache miss");
        let detail = self.ability_repo.fetch_ability(ability_id).await?;
        self.ability_cache.set(detail.clone()).await;
        Ok(detail)
    }

    pub async fn ability_by_name(&self, name: &str) -> DomainResult<AbilityDetail> {
        if let Some(cached) = self.ability_cache.get_by_name(name).await {
            return Ok(cached);
        }

        debug!(name, "ability cache miss");
        let detail = self.ability_repo.fetch_ability_by_name(name).await?;
        self.ability_cache.set(detail.clone()).await;
        Ok(detail)
    }

    pub async fn type_detail(&self, name: &str) -> DomainResult<TypeDetail> {
        if let Some(cached) = self.type_cache.get(name.to_string()).await {
            return Ok(cached);
        }

        debug!(name, "type cache miss");
        let detail = self.type_repo.fetch_type(name).await?;
        self.type_cache.set(name.to_string(), detail.clone()).await;
        Ok(detail)
    }

    pub async fn forms(&self, pokemon_id: u32) -> DomainResult<Vec<PokemonForm>> {
        if let Some(cached) = self.form_cache.get(pokemon_id).await {
            return Ok(cached);
        }

        debug!(pokemon_id, "form cache miss");
        let forms = self.detail_repo.fetch_forms(pokemon_id).await?;
        self.form_cache.set(pokemon_id, forms.clone()).await;
        Ok(forms)
    }

    pub async fn locations(&self, pokemon_id: u32) -> DomainResult<Vec<PokemonLocation>> {
        if let Some(cached) = self.location_cache.get(pokemon_id).await {
            return Ok(cached);
        }

        debug!(pokemon_id, "location cache miss");
        let locations = self.detail_repo.fetch_locations(pokemon_id).await?;
        self.location_cache.set(pokemon_id, locations.clone()).await;
        Ok(locations)
    }

    /// Move listing for a version group (or all moves).
    pub async fn moves(&self, version_group: Option<&str>) -> DomainResult<Vec<MoveEntity>> {
        let key = MoveCache::listing_key(version_group);
        if let Some(cached) = self.move_cache.get(&key).await {
            return Ok(cached);
        }

        debug!(key = %key, "move cache miss");
        let moves = self.move_repo.fetch_all_moves(version_group).await?;
        self.move_cache.set(key, moves.clone()).await;
        Ok(moves)
    }

    /// Full item catalog, loading and indexing it on first use.
    pub async fn all_items(&self) -> DomainResult<Vec<ItemEntity>> {
        if let Some(cached) = self.item_cache.get_all().await {
            return Ok(cached);
        }

        debug!("item catalog cache miss");
        let items = self.item_repo.fetch_all_items().await?;
        self.item_cache.set_all(items.clone()).await;
        Ok(items)
    }

    /// One item by id; `Ok(None)` when the catalog has no such item.
    pub async fn item(&self, item_id: u32) -> DomainResult<Option<ItemEntity>> {
        if let Some(cached) = self.item_cache.get_by_id(item_id).await {
            return Ok(Some(cached));
        }

        let items = self.all_items().await?;
        Ok(items.into_iter().find(|item| item.id == item_id))
    }

    /// One item by name; `Ok(None)` when the catalog has no such item.
    pub async fn item_by_name(&self, name: &str) -> DomainResult<Option<ItemEntity>> {
        if let Some(cached) = self.item_cache.get_by_name(name).await {
            return Ok(Some(cached));
        }

        let items = self.all_items().await?;
        Ok(items.into_iter().find(|item| item.name == name))
    }

    /// Drop an ability entry, e.g. after upstream data changes.
    pub async fn invalidate_ability(&self, ability_id: u32) {
        self.ability_cache.remove_by_id(ability_id).await;
    }

    /// Empty every cache. Atomic per cache, not across them: a
    /// concurrent reader may see some caches cleared before others.
    pub async fn clear_caches(&self) {
        debug!("clearing all pokedex caches");
        self.ability_cache.clear().await;
        self.type_cache.clear().await;
        self.form_cache.clear().await;
        self.location_cache.clear().await;
        self.item_cache.clear().await;
        self.move_cache.clear().await;
    }
}
