//! Bounded, persisted battle preset store.
//!
//! Presets live as one JSON blob under a fixed key in a [`BlobStore`].
//! The in-memory view is rebuilt from the blob on every operation rather
//! than cached, so memory and disk can never drift apart.

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::BattlePreset;
use crate::domain::ports::BlobStore;
use uuid::Uuid;

/// Storage key for the serialized preset list.
const PRESETS_KEY: &str = "battle_presets_v1";

/// Default capacity bound.
pub const DEFAULT_PRESET_CAPACITY: usize = 20;

/// Ordered preset collection bounded to a fixed capacity.
///
/// Eviction is FIFO by insertion position: when a save pushes the list
/// over capacity, the oldest-inserted presets are dropped. Updating an
/// existing preset keeps its position, so an old preset is not protected
/// from eviction by being edited.
pub struct BattlePresetStore<S> {
    store: S,
    capacity: usize,
    /// Serializes load-merge-persist sequences. Two concurrent saves
    /// would otherwise read the same blob and the later persist would
    /// drop the earlier caller's preset.
    write_lock: Mutex<()>,
}

impl<S: BlobStore> BattlePresetStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, DEFAULT_PRESET_CAPACITY)
    }

    pub fn with_capacity(store: S, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            write_lock: Mutex::new(()),
        }
    }

    /// All presets in insertion order.
    ///
    /// A missing blob is an empty list. A blob that fails to decode is
    /// treated the same: the store is a best-effort cache of user
    /// preferences, so corruption means "nothing saved", logged but not
    /// surfaced. Backend read failures do propagate.
    pub async fn list(&self) -> DomainResult<Vec<BattlePreset>> {
        let Some(bytes) = self.store.get(PRESETS_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(&bytes) {
            Ok(presets) => Ok(presets),
            Err(err) => {
                warn!(error = %err, "discarding undecodable preset blob");
                Ok(Vec::new())
            }
        }
    }

    /// Insert or update a preset, then persist the whole list.
    ///
    /// An existing preset (same id) is replaced in place; a new one is
    /// appended. The list is then trimmed to capacity from the front and
    /// written back in a single blob replacement.
    pub async fn save(&self, preset: BattlePreset) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.list().await?;
        upsert_bounded(&mut presets, preset, self.capacity);
        self.persist(&presets).await
    }

    /// Remove the preset with `id`, if present, and persist.
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.list().await?;
        presets.retain(|p| p.id != id);
        self.persist(&presets).await
    }

    /// Look up one preset by id.
    pub async fn get(&self, id: Uuid) -> DomainResult<Option<BattlePreset>> {
        Ok(self.list().await?.into_iter().find(|p| p.id == id))
    }

    /// Drop the whole persisted blob.
    pub async fn delete_all(&self) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        debug!("deleting all battle presets");
        self.store.remove(PRESETS_KEY).await
    }

    async fn persist(&self, presets: &[BattlePreset]) -> DomainResult<()> {
        let bytes = serde_json::to_vec(presets)?;
        self.store.set(PRESETS_KEY, bytes).await
    }
}

/// Pure merge step of [`BattlePresetStore::save`]: replace-in-place by
/// id or append, then drop from the front while over `capacity`.
pub fn upsert_bounded(presets: &mut Vec<BattlePreset>, preset: BattlePreset, capacity: usize) {
    match presets.iter_mut().find(|p| p.id == preset.id) {
        Some(slot) => *slot = preset,
        None => presets.push(preset),
    }
    if presets.len() > capacity {
        let excess = presets.len() - capacity;
        presets.drain(..excess);
    }
}
