//! Integration tests for the cache family.

use pokedex_data::adapters::cache::{AbilityCache, FormCache, ItemCache, MoveCache};
use pokedex_data::domain::models::{
    AbilityDetail, ItemEntity, MoveEntity, PokemonForm, PokemonType,
};

fn ability(id: u32, name: &str) -> AbilityDetail {
    AbilityDetail {
        id,
        name: name.to_string(),
        name_ja: None,
        effect: format!("{name} effect"),
        flavor_text: None,
        is_hidden: false,
    }
}

fn item(id: u32, name: &str) -> ItemEntity {
    ItemEntity {
        id,
        name: name.to_string(),
        name_ja: None,
        category: "held-item".to_string(),
        description: None,
    }
}

fn mv(id: u32, name: &str) -> MoveEntity {
    MoveEntity {
        id,
        name: name.to_string(),
        name_ja: None,
        move_type: PokemonType::new(1, "electric"),
        power: Some(90),
        accuracy: Some(100),
        pp: Some(15),
        damage_class: "special".to_string(),
        priority: 0,
    }
}

fn form(id: u32, pokemon_id: u32, form_name: &str) -> PokemonForm {
    PokemonForm {
        id,
        name: format!("pokemon-{form_name}"),
        pokemon_id,
        form_name: form_name.to_string(),
        types: vec![PokemonType::new(1, "electric")],
        is_default: form_name == "normal",
        is_mega: false,
        is_regional: form_name == "alola",
        version_group: None,
    }
}

#[tokio::test]
async fn ability_cache_get_after_set_by_each_key() {
    let cache = AbilityCache::new();
    cache.set(ability(9, "static")).await;

    assert_eq!(cache.get_by_id(9).await.map(|a| a.name), Some("static".to_string()));
    assert_eq!(cache.get_by_name("static").await.map(|a| a.id), Some(9));
}

#[tokio::test]
async fn ability_cache_remove_by_either_key_clears_both() {
    let cache = AbilityCache::new();

    cache.set(ability(9, "static")).await;
    cache.remove_by_id(9).await;
    assert!(cache.get_by_id(9).await.is_none());
    assert!(cache.get_by_name("static").await.is_none());

    cache.set(ability(9, "static")).await;
    cache.remove_by_name("static").await;
    assert!(cache.get_by_id(9).await.is_none());
    assert!(cache.get_by_name("static").await.is_none());

    // absent keys are a no-op, not an error
    cache.remove_by_id(424242).await;
    cache.remove_by_name("no-such-ability").await;
}

#[tokio::test]
async fn dual_key_indexes_always_agree() {
    let cache = AbilityCache::new();

    cache.set(ability(9, "static")).await;
    cache.set(ability(10, "volt-absorb")).await;
    // overwrite id 9 under a new name: the stale name must go with it
    cache.set(ability(9, "lightning-rod")).await;
    cache.remove_by_name("volt-absorb").await;

    assert!(cache.get_by_name("static").await.is_none());
    assert_eq!(
        cache.get_by_name("lightning-rod").await.map(|a| a.id),
        Some(9)
    );
    assert_eq!(
        cache.get_by_id(9).await.map(|a| a.name),
        Some("lightning-rod".to_string())
    );
    // removal by name cleared the id index too
    assert!(cache.get_by_id(10).await.is_none());
    assert!(cache.get_by_name("volt-absorb").await.is_none());
}

#[tokio::test]
async fn item_cache_full_listing_gated_on_set_all() {
    let cache = ItemCache::new();
    assert!(cache.get_all().await.is_none());

    // individual sets do not create a full listing
    cache.set(item(1, "master-ball")).await;
    assert!(cache.get_all().await.is_none());

    let listing = vec![item(1, "master-ball"), item(2, "ultra-ball"), item(3, "great-ball")];
    cache.set_all(listing.clone()).await;

    assert_eq!(cache.get_all().await, Some(listing));
    assert_eq!(cache.get_by_id(2).await.map(|i| i.name), Some("ultra-ball".to_string()));
    assert_eq!(cache.get_by_name("great-ball").await.map(|i| i.id), Some(3));

    cache.clear().await;
    assert!(cache.get_all().await.is_none());
    assert!(cache.get_by_id(1).await.is_none());
}

#[tokio::test]
async fn form_cache_preserves_listing_order() {
    let cache = FormCache::new();
    let forms = vec![form(100, 26, "normal"), form(101, 26, "alola")];

    cache.set(26, forms.clone()).await;
    assert_eq!(cache.get(26).await, Some(forms));
    assert_eq!(cache.get(27).await, None);
}

#[tokio::test]
async fn concurrent_writers_leave_dual_cache_complete() {
    let cache = AbilityCache::new();

    let mut handles = Vec::new();
    for i in 0..50u32 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.set(ability(i, &format!("ability-{i}"))).await;
        }));
    }
    for handle in handles {
        handle.await.expect("writer task panicked");
    }

    for i in 0..50u32 {
        let name = format!("ability-{i}");
        assert_eq!(cache.get_by_id(i).await.map(|a| a.name), Some(name.clone()));
        assert_eq!(cache.get_by_name(&name).await.map(|a| a.id), Some(i));
    }
}

#[tokio::test]
async fn move_cache_read_after_write_and_clear() {
    let cache = MoveCache::new();
    let key = MoveCache::listing_key(Some("scarlet-violet"));
    assert_eq!(key, "moves_scarlet-violet");
    assert_eq!(MoveCache::listing_key(None), "moves_all");

    let moves = vec![mv(85, "thunderbolt"), mv(57, "surf")];
    cache.set(key.clone(), moves.clone()).await;
    assert_eq!(cache.get(&key).await, Some(moves));

    cache.clear().await;
    assert_eq!(cache.get(&key).await, None);
}

#[tokio::test]
async fn move_cache_concurrent_readers_see_whole_listings() {
    let cache = MoveCache::new();
    let listing: Vec<MoveEntity> = (0..100).map(|i| mv(i, &format!("move-{i}"))).collect();
    cache.set("moves_all", listing.clone()).await;

    let mut handles = Vec::new();
    for _ in 0..32 {
        let cache = cache.clone();
        let expected = listing.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                // a listing is never observed partially written
                let got = cache.get("moves_all").await.expect("listing vanished");
                assert_eq!(got.len(), expected.len());
                assert_eq!(got, expected);
            }
        }));
    }
    // one writer replacing the listing with an identical copy while reads run
    {
        let cache = cache.clone();
        let listing = listing.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                cache.set("moves_all", listing.clone()).await;
            }
        }));
    }

    for handle in handles {
        handle.await.expect("cache task panicked");
    }
}
