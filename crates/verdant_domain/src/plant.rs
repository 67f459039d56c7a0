use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category a plant is filed under; drives the default care cadence.
///
/// Stored values outside the known set fold into `Unknown` so old or
/// hand-edited data keeps loading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Succulent,
    Tropical,
    Fern,
    Herb,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PlantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PlantCategory::Succulent => "succulent",
            PlantCategory::Tropical => "tropical",
            PlantCategory::Fern => "fern",
            PlantCategory::Herb => "herb",
            PlantCategory::Unknown => "unknown",
        };
        f.write_str(token)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CareTaskType {
    Water,
    Fertilize,
}

impl fmt::Display for CareTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            CareTaskType::Water => "water",
            CareTaskType::Fertilize => "fertilize",
        };
        f.write_str(token)
    }
}

/// One recurring care task. A plant carries at most one schedule per task
/// type; `last_completed` stays absent until the task is first completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareSchedule {
    #[serde(rename = "type")]
    pub task: CareTaskType,
    #[serde(rename = "intervalDays")]
    pub interval_days: u32,
    #[serde(
        rename = "lastCompleted",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_completed: Option<DateTime<Utc>>,
}

/// Aggregate root. `id`, `created_at` and `category` are fixed at creation;
/// schedules are only ever touched through completion updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: PlantCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_days: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub schedules: Vec<CareSchedule>,
}

impl Plant {
    pub fn schedule(&self, task: CareTaskType) -> Option<&CareSchedule> {
        self.schedules.iter().find(|schedule| schedule.task == task)
    }
}

/// Display bucket, recomputed from the current date and schedule state on
/// every pass. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlantStatus {
    Upcoming,
    Forgot,
    History,
}

/// Caller-supplied fields for a new plant. The caller trims and rejects
/// empty names before handing a draft in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: String,
    pub category: Option<PlantCategory>,
    pub description: Option<String>,
    pub room: Option<String>,
    pub photo_uri: Option<String>,
    pub water_amount: Option<String>,
    pub water_days: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stored_shape_uses_wire_field_names() {
        let plant = Plant {
            id: "p-1".into(),
            name: "Monstera".into(),
            description: None,
            category: PlantCategory::Tropical,
            room: Some("Kitchen".into()),
            photo_uri: None,
            water_amount: None,
            water_days: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            schedules: vec![CareSchedule {
                task: CareTaskType::Water,
                interval_days: 7,
                last_completed: None,
            }],
        };

        let value = serde_json::to_value(&plant).expect("serialize plant");
        assert_eq!(value["category"], "tropical");
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(value["schedules"][0]["type"], "water");
        assert_eq!(value["schedules"][0]["intervalDays"], 7);
        assert!(
            value["schedules"][0].get("lastCompleted").is_none(),
            "absent completion should not serialize"
        );
        assert!(value.get("room").is_some());
        assert!(value.get("photoUri").is_none());
    }

    #[test]
    fn missing_optionals_deserialize_to_absent() {
        let raw = r#"{
            "id": "p-2",
            "name": "Aloe",
            "createdAt": "2024-03-05T08:30:00Z"
        }"#;
        let plant: Plant = serde_json::from_str(raw).expect("deserialize plant");
        assert_eq!(plant.category, PlantCategory::Unknown);
        assert!(plant.description.is_none());
        assert!(plant.water_days.is_none());
        assert!(plant.schedules.is_empty());
    }

    #[test]
    fn unrecognised_category_folds_into_unknown() {
        let raw = r#"{
            "id": "p-3",
            "name": "Mystery",
            "category": "cactus",
            "createdAt": "2024-03-05T08:30:00Z"
        }"#;
        let plant: Plant = serde_json::from_str(raw).expect("deserialize plant");
        assert_eq!(plant.category, PlantCategory::Unknown);
    }
}
