use crate::plant::{CareSchedule, CareTaskType, PlantCategory};

/// Default care cadence for a category, in days between occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarePreset {
    pub water_every_days: u32,
    pub fertilize_every_days: u32,
}

/// Total over the category enum; `Unknown` carries the conservative
/// fallback cadence, so there is no error path.
pub fn preset_for(category: PlantCategory) -> CarePreset {
    match category {
        PlantCategory::Succulent => CarePreset {
            water_every_days: 14,
            fertilize_every_days: 45,
        },
        PlantCategory::Tropical => CarePreset {
            water_every_days: 7,
            fertilize_every_days: 30,
        },
        PlantCategory::Fern => CarePreset {
            water_every_days: 5,
            fertilize_every_days: 30,
        },
        PlantCategory::Herb => CarePreset {
            water_every_days: 4,
            fertilize_every_days: 30,
        },
        PlantCategory::Unknown => CarePreset {
            water_every_days: 7,
            fertilize_every_days: 45,
        },
    }
}

/// Initial schedules for a newly created plant: exactly one water entry and
/// one fertilize entry, in that order, neither completed yet.
pub fn build_schedules(category: PlantCategory) -> Vec<CareSchedule> {
    let preset = preset_for(category);
    vec![
        CareSchedule {
            task: CareTaskType::Water,
            interval_days: preset.water_every_days,
            last_completed: None,
        },
        CareSchedule {
            task: CareTaskType::Fertilize,
            interval_days: preset.fertilize_every_days,
            last_completed: None,
        },
    ]
}
