//! Read-heavy move listing cache.
//!
//! Move listings are fetched rarely (once per version group) and read on
//! every filter interaction, so this cache uses a reader-writer lock
//! instead of a worker task: lookups share the read lock and proceed in
//! parallel, writes take the exclusive side and are visible to every
//! read issued after they return.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::models::MoveEntity;

/// Cache of ordered move listings under composite string keys.
#[derive(Clone, Default)]
pub struct MoveCache {
    entries: Arc<RwLock<HashMap<String, Vec<MoveEntity>>>>,
}

impl MoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a version-group-scoped listing.
    pub fn listing_key(version_group: Option<&str>) -> String {
        match version_group {
            Some(group) => format!("moves_{group}"),
            None => "moves_all".to_string(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Vec<MoveEntity>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: impl Into<String>, moves: Vec<MoveEntity>) {
        self.entries.write().await.insert(key.into(), moves);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
