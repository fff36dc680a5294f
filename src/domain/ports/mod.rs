//! Port trait definitions (Hexagonal Architecture).
//!
//! Async trait interfaces that adapters implement:
//! - repository ports: opaque data sources the caches front
//! - `BlobStore`: key-value persistence backing the preset store

pub mod blob_store;
pub mod repositories;

pub use blob_store::BlobStore;
pub use repositories::{
    AbilityRepository, ItemRepository, MoveRepository, PokemonDetailRepository, TypeRepository,
};
