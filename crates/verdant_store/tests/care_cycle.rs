use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use verdant_domain::{CareTaskType, PlantCategory, PlantDraft, PlantStatus};
use verdant_store::{KvPlantsBackend, KvStore, PlantStore, Settings};

fn open_store(path: &std::path::Path) -> PlantStore {
    let kv = Arc::new(KvStore::open(path));
    PlantStore::builder()
        .with_backend(Box::new(KvPlantsBackend::new(kv)))
        .build()
}

#[test]
fn collection_survives_reopen_and_completion_round_trip() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("verdant.json");

    let store = open_store(&path);
    let monstera = store
        .add(PlantDraft {
            name: "Monstera".into(),
            category: Some(PlantCategory::Tropical),
            room: Some("Kitchen".into()),
            ..PlantDraft::default()
        })
        .expect("add monstera");
    store
        .add(PlantDraft {
            name: "Echeveria".into(),
            category: Some(PlantCategory::Succulent),
            ..PlantDraft::default()
        })
        .expect("add echeveria");
    drop(store);

    let reopened = open_store(&path);
    let plants = reopened.list();
    assert_eq!(plants.len(), 2);
    assert_eq!(plants[0].name, "Echeveria", "newest-first order persists");
    assert_eq!(plants[1].room.as_deref(), Some("Kitchen"));

    reopened
        .complete(&monstera.id, CareTaskType::Water)
        .expect("water monstera");
    drop(reopened);

    let after_completion = open_store(&path);
    let watered = after_completion.get(&monstera.id).expect("monstera kept");
    assert!(watered
        .schedule(CareTaskType::Water)
        .expect("water schedule")
        .last_completed
        .is_some());
    assert!(watered
        .schedule(CareTaskType::Fertilize)
        .expect("fertilize schedule")
        .last_completed
        .is_none());

    let today = verdant_domain::dates::start_of_today();
    let history = after_completion.list_filtered_on(PlantStatus::History, today);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, monstera.id);
}

#[test]
fn corrupt_store_file_loads_as_empty_collection() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("verdant.json");
    fs::write(&path, "definitely not json").expect("write corrupt file");

    let store = open_store(&path);
    assert!(store.is_empty());

    // the store recovers on the next write
    store
        .add(PlantDraft {
            name: "Survivor".into(),
            ..PlantDraft::default()
        })
        .expect("add after corrupt load");
    drop(store);

    assert_eq!(open_store(&path).len(), 1);
}

#[test]
fn onboarding_flag_shares_the_store_file_with_plants() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("verdant.json");

    let kv = Arc::new(KvStore::open(&path));
    let settings = Settings::new(kv.clone());
    let store = PlantStore::builder()
        .with_backend(Box::new(KvPlantsBackend::new(kv)))
        .build();

    assert!(!settings.onboarding_seen());
    settings.set_onboarding_seen(true).expect("set flag");
    store
        .add(PlantDraft {
            name: "Fern".into(),
            category: Some(PlantCategory::Fern),
            ..PlantDraft::default()
        })
        .expect("add fern");
    drop((settings, store));

    let kv = Arc::new(KvStore::open(&path));
    assert!(Settings::new(kv.clone()).onboarding_seen());
    let reloaded = PlantStore::builder()
        .with_backend(Box::new(KvPlantsBackend::new(kv)))
        .build();
    assert_eq!(reloaded.len(), 1);
}
