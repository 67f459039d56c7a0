use std::sync::Arc;

use parking_lot::RwLock;

use verdant_domain::Plant;

use crate::kv::{KvStore, StoreError};

/// Fixed namespace key the plant collection is stored under.
pub const PLANTS_KEY: &str = "verdant/plants";

/// Where the plant collection lives. The container calls `save` after every
/// snapshot transition and `load` once at startup.
pub trait PlantsBackend: Send + Sync {
    fn load(&self) -> Vec<Plant>;
    fn save(&self, plants: &[Plant]) -> Result<(), StoreError>;
}

/// File-backed storage through the key-value store. A missing or
/// unreadable entry loads as an empty collection.
pub struct KvPlantsBackend {
    store: Arc<KvStore>,
}

impl KvPlantsBackend {
    pub fn new(store: Arc<KvStore>) -> Self {
        Self { store }
    }
}

impl PlantsBackend for KvPlantsBackend {
    fn load(&self) -> Vec<Plant> {
        self.store.get(PLANTS_KEY).unwrap_or_default()
    }

    fn save(&self, plants: &[Plant]) -> Result<(), StoreError> {
        self.store.set(PLANTS_KEY, &plants)
    }
}

/// In-memory backend; keeps the container usable with no persistence
/// attached, which is also how the unit tests run it.
#[derive(Default)]
pub struct MemoryBackend {
    plants: RwLock<Vec<Plant>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Plant> {
        self.plants.read().clone()
    }
}

impl<B: PlantsBackend + ?Sized> PlantsBackend for Arc<B> {
    fn load(&self) -> Vec<Plant> {
        (**self).load()
    }

    fn save(&self, plants: &[Plant]) -> Result<(), StoreError> {
        (**self).save(plants)
    }
}

impl PlantsBackend for MemoryBackend {
    fn load(&self) -> Vec<Plant> {
        self.plants.read().clone()
    }

    fn save(&self, plants: &[Plant]) -> Result<(), StoreError> {
        *self.plants.write() = plants.to_vec();
        Ok(())
    }
}
