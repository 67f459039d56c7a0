use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, info};

use verdant_domain::dates::start_of_today;
use verdant_domain::lifecycle::{create_plant, mark_task_completed, normalize};
use verdant_domain::status::qualifies;
use verdant_domain::{
    CareTaskType, Clock, IdSource, Plant, PlantDraft, PlantStatus, SystemClock, UuidIds,
};

use crate::plants::{MemoryBackend, PlantsBackend};

/// Partial in-place update. Absent fields are left alone; provided text
/// fields go through the same trim-to-absent normalization as creation.
/// Identity, creation time, category and schedules are not patchable.
#[derive(Debug, Clone, Default)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub room: Option<String>,
    pub photo_uri: Option<String>,
    pub water_amount: Option<String>,
    pub water_days: Option<Vec<String>>,
}

impl PlantPatch {
    fn apply(self, plant: &mut Plant) {
        if let Some(name) = self.name {
            plant.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            plant.description = normalize(Some(description));
        }
        if let Some(room) = self.room {
            plant.room = normalize(Some(room));
        }
        if let Some(photo_uri) = self.photo_uri {
            plant.photo_uri = Some(photo_uri);
        }
        if let Some(water_amount) = self.water_amount {
            plant.water_amount = normalize(Some(water_amount));
        }
        if let Some(water_days) = self.water_days {
            plant.water_days = Some(water_days).filter(|days| !days.is_empty());
        }
    }
}

/// Owns the current plant collection snapshot and serializes its
/// transitions. Every mutation builds the next snapshot, saves it through
/// the backend, then commits it, so storage never lags the collection by
/// more than the in-flight change.
pub struct PlantStore {
    plants: RwLock<Vec<Plant>>,
    backend: Box<dyn PlantsBackend>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

pub struct PlantStoreBuilder {
    backend: Box<dyn PlantsBackend>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl PlantStoreBuilder {
    pub fn new() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
            ids: Box::new(UuidIds),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_backend(mut self, backend: Box<dyn PlantsBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> PlantStore {
        let plants = self.backend.load();
        info!(count = plants.len(), "plant collection loaded");
        PlantStore {
            plants: RwLock::new(plants),
            backend: self.backend,
            ids: self.ids,
            clock: self.clock,
        }
    }
}

impl Default for PlantStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantStore {
    pub fn builder() -> PlantStoreBuilder {
        PlantStoreBuilder::new()
    }

    pub fn list(&self) -> Vec<Plant> {
        self.plants.read().clone()
    }

    pub fn len(&self) -> usize {
        self.plants.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Plant> {
        self.plants.read().iter().find(|p| p.id == id).cloned()
    }

    /// Plants qualifying for one display bucket, measured against today's
    /// midnight anchor.
    pub fn list_filtered(&self, filter: PlantStatus) -> Vec<Plant> {
        self.list_filtered_on(filter, start_of_today())
    }

    pub fn list_filtered_on(&self, filter: PlantStatus, today: DateTime<Utc>) -> Vec<Plant> {
        self.plants
            .read()
            .iter()
            .filter(|plant| qualifies(plant, filter, today))
            .cloned()
            .collect()
    }

    /// Creates a plant from the draft and prepends it, newest first.
    pub fn add(&self, draft: PlantDraft) -> Result<Plant> {
        let plant = create_plant(draft, self.ids.as_ref(), self.clock.as_ref());
        let mut plants = self.plants.write();
        let mut next = plants.clone();
        next.insert(0, plant.clone());
        self.backend.save(&next)?;
        *plants = next;
        info!(id = %plant.id, name = %plant.name, "plant added");
        Ok(plant)
    }

    /// Applies a partial field update to an existing plant.
    pub fn update(&self, id: &str, patch: PlantPatch) -> Result<Plant> {
        let mut plants = self.plants.write();
        let mut next = plants.clone();
        let plant = next
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("no plant with id `{id}`"))?;
        patch.apply(plant);
        let updated = plant.clone();
        self.backend.save(&next)?;
        *plants = next;
        debug!(id, "plant updated");
        Ok(updated)
    }

    /// Marks a care task completed now, replacing the plant by id.
    pub fn complete(&self, id: &str, task: CareTaskType) -> Result<Plant> {
        let mut plants = self.plants.write();
        let mut next = plants.clone();
        let slot = next
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("no plant with id `{id}`"))?;
        let updated = mark_task_completed(slot, task, self.clock.as_ref());
        *slot = updated.clone();
        self.backend.save(&next)?;
        *plants = next;
        info!(id, task = ?task, "care task completed");
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let mut plants = self.plants.write();
        let mut next = plants.clone();
        let before = next.len();
        next.retain(|p| p.id != id);
        if next.len() == before {
            return Err(anyhow!("no plant with id `{id}`"));
        }
        self.backend.save(&next)?;
        *plants = next;
        info!(id, "plant removed");
        Ok(())
    }
}
