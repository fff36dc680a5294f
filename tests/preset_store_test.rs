//! Integration tests for the battle preset store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pokedex_data::adapters::persistence::{InMemoryBlobStore, SqliteBlobStore};
use pokedex_data::domain::errors::DomainResult;
use pokedex_data::domain::models::{BattlePreset, BattleState};
use pokedex_data::domain::ports::BlobStore;
use pokedex_data::services::BattlePresetStore;
use uuid::Uuid;

/// Blob store whose reads take a while, widening the window between a
/// mutation's load and its persist.
struct SlowReadBlobStore {
    inner: InMemoryBlobStore,
    read_delay: Duration,
}

#[async_trait]
impl BlobStore for SlowReadBlobStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        tokio::time::sleep(self.read_delay).await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> DomainResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.inner.remove(key).await
    }
}

fn preset(name: &str) -> BattlePreset {
    BattlePreset::new(name, BattleState::default())
}

fn store() -> (Arc<InMemoryBlobStore>, BattlePresetStore<Arc<InMemoryBlobStore>>) {
    let blobs = Arc::new(InMemoryBlobStore::new());
    let store = BattlePresetStore::new(blobs.clone());
    (blobs, store)
}

#[tokio::test]
async fn list_is_initially_empty() {
    let (_, store) = store();
    assert!(store.list().await.expect("list failed").is_empty());
}

#[tokio::test]
async fn save_then_get_round_trips() {
    let (_, store) = store();
    let mut state = BattleState::default();
    state.apply_accuracy = true;
    state.attacker.pokemon_id = Some(25);
    let preset = BattlePreset::new("Raid build", state);

    store.save(preset.clone()).await.expect("save failed");

    let loaded = store
        .get(preset.id)
        .await
        .expect("get failed")
        .expect("preset missing");
    assert_eq!(loaded, preset);
    assert!(loaded.updated_at >= preset.created_at);
}

#[tokio::test]
async fn get_unknown_id_is_none_not_error() {
    let (_, store) = store();
    assert!(store.get(Uuid::new_v4()).await.expect("get failed").is_none());
}

#[tokio::test]
async fn save_updates_existing_in_place() {
    let (_, store) = store();
    let mut preset = preset("First draft");
    store.save(preset.clone()).await.expect("save failed");
    store.save(self::preset("Second")).await.expect("save failed");

    preset.update(Some("Final draft".to_string()), None);
    store.save(preset.clone()).await.expect("save failed");

    let presets = store.list().await.expect("list failed");
    assert_eq!(presets.len(), 2);
    // updated entry keeps its original position
    assert_eq!(presets[0].name, "Final draft");
    assert_eq!(presets[1].name, "Second");
}

#[tokio::test]
async fn capacity_evicts_oldest_inserted() {
    let (_, store) = store();
    for i in 1..=25 {
        store
            .save(preset(&format!("Preset {i}")))
            .await
            .expect("save failed");
    }

    let presets = store.list().await.expect("list failed");
    assert_eq!(presets.len(), 20);
    assert_eq!(presets.first().map(|p| p.name.as_str()), Some("Preset 6"));
    assert_eq!(presets.last().map(|p| p.name.as_str()), Some("Preset 25"));
}

#[tokio::test]
async fn update_does_not_shield_an_old_preset_from_eviction() {
    let blobs = Arc::new(InMemoryBlobStore::new());
    let store = BattlePresetStore::with_capacity(blobs, 3);

    let mut oldest = preset("oldest");
    store.save(oldest.clone()).await.expect("save failed");
    store.save(preset("second")).await.expect("save failed");
    store.save(preset("third")).await.expect("save failed");

    // freshen the oldest entry; FIFO position is unchanged
    oldest.update(Some("oldest-refreshed".to_string()), None);
    store.save(oldest.clone()).await.expect("save failed");
    assert_eq!(store.list().await.expect("list failed").len(), 3);

    store.save(preset("fourth")).await.expect("save failed");

    let names: Vec<String> = store
        .list()
        .await
        .expect("list failed")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["second", "third", "fourth"]);
}

#[tokio::test]
async fn corrupted_blob_reads_as_empty() {
    let (blobs, store) = store();
    blobs
        .seed("battle_presets_v1", b"not json at all".to_vec())
        .await;

    let presets = store.list().await.expect("corruption must not error");
    assert!(presets.is_empty());

    // and the store recovers on the next save
    store.save(preset("fresh")).await.expect("save failed");
    assert_eq!(store.list().await.expect("list failed").len(), 1);
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let (_, store) = store();
    let first = preset("first");
    let second = preset("second");
    store.save(first.clone()).await.expect("save failed");
    store.save(second.clone()).await.expect("save failed");

    store.delete(first.id).await.expect("delete failed");
    let presets = store.list().await.expect("list failed");
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].id, second.id);

    // deleting an absent id is a no-op
    store.delete(first.id).await.expect("delete failed");
    assert_eq!(store.list().await.expect("list failed").len(), 1);
}

#[tokio::test]
async fn delete_all_leaves_nothing_behind() {
    let (blobs, store) = store();
    store.save(preset("one")).await.expect("save failed");
    store.save(preset("two")).await.expect("save failed");

    store.delete_all().await.expect("delete_all failed");

    assert!(store.list().await.expect("list failed").is_empty());
    // the blob itself is gone, not just emptied
    assert!(blobs.get("battle_presets_v1").await.expect("get failed").is_none());
}

#[tokio::test]
async fn concurrent_saves_both_land() {
    let blobs = SlowReadBlobStore {
        inner: InMemoryBlobStore::new(),
        read_delay: Duration::from_millis(50),
    };
    let store = BattlePresetStore::new(blobs);

    let (first, second) = tokio::join!(store.save(preset("alpha")), store.save(preset("beta")));
    first.expect("first save failed");
    second.expect("second save failed");

    let mut names: Vec<String> = store
        .list()
        .await
        .expect("list failed")
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();
    assert_eq!(names, ["alpha", "beta"]);
}

#[tokio::test]
async fn sqlite_backed_store_round_trips() {
    let blobs = SqliteBlobStore::connect("sqlite::memory:", 1)
        .await
        .expect("connect failed");
    let store = BattlePresetStore::new(blobs);

    let preset = preset("On disk");
    store.save(preset.clone()).await.expect("save failed");
    assert_eq!(
        store.get(preset.id).await.expect("get failed"),
        Some(preset.clone())
    );

    store.delete_all().await.expect("delete_all failed");
    assert!(store.list().await.expect("list failed").is_empty());
}

#[tokio::test]
async fn sqlite_blob_store_set_replaces_whole_value() {
    let blobs = SqliteBlobStore::connect("sqlite::memory:", 1)
        .await
        .expect("connect failed");

    assert!(blobs.get("k").await.expect("get failed").is_none());

    blobs.set("k", vec![1, 2, 3]).await.expect("set failed");
    blobs.set("k", vec![9]).await.expect("set failed");
    assert_eq!(blobs.get("k").await.expect("get failed"), Some(vec![9]));

    blobs.remove("k").await.expect("remove failed");
    blobs.remove("k").await.expect("remove twice failed");
    assert!(blobs.get("k").await.expect("get failed").is_none());
}
