pub mod kv;
pub mod plants;
pub mod settings;
pub mod store;

pub use crate::kv::{KvStore, StoreError};
pub use crate::plants::{KvPlantsBackend, MemoryBackend, PlantsBackend, PLANTS_KEY};
pub use crate::settings::Settings;
pub use crate::store::{PlantPatch, PlantStore, PlantStoreBuilder};
