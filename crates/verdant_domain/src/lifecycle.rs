use crate::dates::Clock;
use crate::ids::IdSource;
use crate::plant::{CareTaskType, Plant, PlantDraft};
use crate::presets::build_schedules;

/// Builds a fresh plant from a draft: new identity, `created_at` stamped
/// from the clock, schedules derived from the category (defaulting to
/// `Unknown`), and free-text fields trimmed to absent-if-empty. The name is
/// trimmed but not validated; rejecting blank names is the caller's job.
pub fn create_plant(draft: PlantDraft, ids: &dyn IdSource, clock: &dyn Clock) -> Plant {
    let category = draft.category.unwrap_or_default();
    Plant {
        id: ids.make_id(),
        name: draft.name.trim().to_string(),
        description: normalize(draft.description),
        category,
        room: normalize(draft.room),
        photo_uri: draft.photo_uri,
        water_amount: normalize(draft.water_amount),
        water_days: draft.water_days.filter(|days| !days.is_empty()),
        created_at: clock.now(),
        schedules: build_schedules(category),
    }
}

/// Returns a copy of the plant with the matching schedule's completion
/// stamp set to now. Replaces in place by task type, never appends, so the
/// one-schedule-per-type invariant holds across repeated completions. A
/// missing task type leaves the plant unchanged.
pub fn mark_task_completed(plant: &Plant, task: CareTaskType, clock: &dyn Clock) -> Plant {
    let completed_at = clock.now();
    let mut updated = plant.clone();
    for schedule in &mut updated.schedules {
        if schedule.task == task {
            schedule.last_completed = Some(completed_at);
        }
    }
    updated
}

/// Empty-after-trim strings collapse to absent so stored records never
/// carry whitespace-only fields.
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
