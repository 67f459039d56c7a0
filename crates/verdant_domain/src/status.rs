use chrono::{DateTime, Utc};

use crate::due::next_due_on;
use crate::plant::{Plant, PlantStatus};

/// True when the plant's nearest due date lies strictly before `today`.
/// `today` is expected to be a start-of-day anchor so the comparison is
/// stable across one computation pass.
pub fn is_overdue(plant: &Plant, today: DateTime<Utc>) -> bool {
    next_due_on(plant, today).is_some_and(|due| due.due_date < today)
}

/// True once any schedule on the plant has been completed at least once.
pub fn has_history(plant: &Plant) -> bool {
    plant
        .schedules
        .iter()
        .any(|schedule| schedule.last_completed.is_some())
}

/// Whether a plant belongs in the given display bucket. Buckets are
/// independent predicates, not exclusive tags: a plant with completion
/// history qualifies for `History` while also landing in `Forgot` or
/// `Upcoming`. The caller applies exactly one filter at a time.
pub fn qualifies(plant: &Plant, filter: PlantStatus, today: DateTime<Utc>) -> bool {
    match filter {
        PlantStatus::History => has_history(plant),
        PlantStatus::Forgot => is_overdue(plant, today),
        PlantStatus::Upcoming => !is_overdue(plant, today),
    }
}

/// Default display bucket: overdue plants are `Forgot`, everything else is
/// `Upcoming`. `History` is orthogonal and only reachable as a filter.
pub fn classify(plant: &Plant, today: DateTime<Utc>) -> PlantStatus {
    if is_overdue(plant, today) {
        PlantStatus::Forgot
    } else {
        PlantStatus::Upcoming
    }
}
