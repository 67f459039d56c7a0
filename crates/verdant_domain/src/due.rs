use chrono::{DateTime, Utc};

use crate::dates::{add_days, day_diff, start_of_today};
use crate::plant::{CareTaskType, Plant};

/// The single most urgent task on a plant: the schedule whose due date is
/// earliest, overdue dates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueInfo {
    pub task: CareTaskType,
    pub due_date: DateTime<Utc>,
    pub label: String,
}

/// Nearest-due task measured against today's midnight anchor. Absent iff
/// the plant has no schedules.
pub fn next_due(plant: &Plant) -> Option<DueInfo> {
    next_due_on(plant, start_of_today())
}

/// Deterministic form of [`next_due`] with the anchor supplied by the
/// caller. A schedule that was never completed anchors on the plant's
/// creation date. Ties keep the first schedule in iteration order, which is
/// fixed at creation (water before fertilize).
pub fn next_due_on(plant: &Plant, today: DateTime<Utc>) -> Option<DueInfo> {
    let mut next: Option<DueInfo> = None;

    for schedule in &plant.schedules {
        let anchor = schedule.last_completed.unwrap_or(plant.created_at);
        let due_date = add_days(anchor, i64::from(schedule.interval_days));
        let is_nearer = next
            .as_ref()
            .map_or(true, |current| due_date < current.due_date);
        if is_nearer {
            next = Some(DueInfo {
                task: schedule.task,
                due_date,
                label: due_label(due_date, today),
            });
        }
    }

    next
}

/// Human-readable distance between a due date and today's anchor.
pub fn due_label(due_date: DateTime<Utc>, today: DateTime<Utc>) -> String {
    match day_diff(due_date, today) {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        diff if diff > 1 => format!("In {diff} days"),
        -1 => "Overdue by 1 day".to_string(),
        diff => format!("Overdue by {} days", diff.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::{CareSchedule, PlantCategory};
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().expect("valid date")
    }

    fn plant_with(schedules: Vec<CareSchedule>) -> Plant {
        Plant {
            id: "p-1".into(),
            name: "Fig".into(),
            description: None,
            category: PlantCategory::Unknown,
            room: None,
            photo_uri: None,
            water_amount: None,
            water_days: None,
            created_at: day(2024, 1, 1),
            schedules,
        }
    }

    fn water_every(days: u32, last_completed: Option<DateTime<Utc>>) -> CareSchedule {
        CareSchedule {
            task: CareTaskType::Water,
            interval_days: days,
            last_completed,
        }
    }

    #[test]
    fn no_schedules_means_no_due_info() {
        let plant = plant_with(Vec::new());
        assert_eq!(next_due_on(&plant, day(2024, 1, 1)), None);
    }

    #[test]
    fn uncompleted_schedule_anchors_on_creation_date() {
        let plant = plant_with(vec![water_every(7, None)]);
        let due = next_due_on(&plant, day(2024, 1, 1)).expect("due info");
        assert_eq!(due.task, CareTaskType::Water);
        assert_eq!(due.due_date, day(2024, 1, 8));
    }

    #[test]
    fn completed_schedule_anchors_on_last_completion() {
        let plant = plant_with(vec![water_every(7, Some(day(2024, 2, 1)))]);
        let due = next_due_on(&plant, day(2024, 2, 1)).expect("due info");
        assert_eq!(due.due_date, day(2024, 2, 8));
    }

    #[test]
    fn earliest_due_date_wins_regardless_of_type() {
        // water due in 3 days, fertilize overdue by 2
        let plant = plant_with(vec![
            water_every(13, None),
            CareSchedule {
                task: CareTaskType::Fertilize,
                interval_days: 8,
                last_completed: None,
            },
        ]);
        let due = next_due_on(&plant, day(2024, 1, 11)).expect("due info");
        assert_eq!(due.task, CareTaskType::Fertilize);
        assert_eq!(due.due_date, day(2024, 1, 9));
        assert_eq!(due.label, "Overdue by 2 days");
    }

    #[test]
    fn ties_keep_the_water_entry() {
        let plant = plant_with(vec![
            water_every(7, None),
            CareSchedule {
                task: CareTaskType::Fertilize,
                interval_days: 7,
                last_completed: None,
            },
        ]);
        let due = next_due_on(&plant, day(2024, 1, 5)).expect("due info");
        assert_eq!(due.task, CareTaskType::Water);
    }

    #[test]
    fn labels_cover_today_tomorrow_future_and_overdue() {
        let due_date = day(2024, 3, 10);
        assert_eq!(due_label(due_date, due_date), "Due today");
        assert_eq!(due_label(due_date, add_days(due_date, -1)), "Due tomorrow");
        assert_eq!(due_label(due_date, add_days(due_date, -5)), "In 5 days");
        assert_eq!(due_label(due_date, add_days(due_date, 1)), "Overdue by 1 day");
        assert_eq!(
            due_label(due_date, add_days(due_date, 5)),
            "Overdue by 5 days"
        );
    }
}
