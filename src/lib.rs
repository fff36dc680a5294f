//! Pokedex data layer: concurrent caching, bulk move-learnability
//! resolution, and bounded preset persistence.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture:
//!
//! - **Domain** (`domain`): entities, errors, and the async port traits
//!   for repositories and blob persistence
//! - **Adapters** (`adapters`): the cache family (actor-style dual/single
//!   keyed caches, a reader-writer move cache) and blob store backends
//! - **Services** (`services`): the bounded battle preset store
//! - **Application** (`application`): the cache-first lookup service and
//!   the bulk move filter use case
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokedex_data::adapters::persistence::SqliteBlobStore;
//! use pokedex_data::config::DataConfig;
//! use pokedex_data::services::BattlePresetStore;
//!
//! #[tokio::main]
//! async fn main() -> pokedex_data::domain::DomainResult<()> {
//!     let config = DataConfig::load()?;
//!     let blobs =
//!         SqliteBlobStore::connect(&config.database.url, config.database.max_connections).await?;
//!     let presets = BattlePresetStore::with_capacity(blobs, config.presets.capacity);
//!     for preset in presets.list().await? {
//!         println!("{}", preset.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod services;

pub use adapters::cache::{
    AbilityCache, DualKeyed, DualKeyedCache, FormCache, ItemCache, KeyedCache, LocationCache,
    MoveCache, TypeCache,
};
pub use adapters::persistence::{InMemoryBlobStore, SqliteBlobStore};
pub use application::{FilterPokemonByMovesUseCase, MoveFilterMatch, PokedexService};
pub use config::DataConfig;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AbilityDetail, BattlePreset, BattleState, FilterMode, ItemEntity, LearnMethod, MoveEntity,
    MoveLearnMethod, Pokemon, PokemonForm, PokemonLocation, PokemonType, TypeDetail,
};
pub use domain::ports::{
    AbilityRepository, BlobStore, ItemRepository, MoveRepository, PokemonDetailRepository,
    TypeRepository,
};
pub use services::BattlePresetStore;
