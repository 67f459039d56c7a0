use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, ensure, Result};
use tracing::info;

use verdant_domain::due::next_due;
use verdant_domain::{CareTaskType, Plant, PlantCategory, PlantDraft, PlantStatus};
use verdant_store::{KvPlantsBackend, KvStore, PlantPatch, PlantStore, Settings};

use crate::cli::{AddArgs, Cli, Commands, UpdateArgs};

const STORE_FILE: &str = "verdant.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub(crate) data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("VERDANT_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".verdant"),
        }
    }
}

pub fn run(config: AppConfig, cli: Cli) -> Result<()> {
    info!(path = %config.data_dir.display(), "using data directory");
    let kv = Arc::new(KvStore::open(config.data_dir.join(STORE_FILE)));
    let settings = Settings::new(kv.clone());
    let store = PlantStore::builder()
        .with_backend(Box::new(KvPlantsBackend::new(kv)))
        .build();

    if !settings.onboarding_seen() {
        println!("Welcome to Verdant. Your plants, calm and organized.\n");
        settings.set_onboarding_seen(true)?;
    }

    match cli.command {
        Commands::List { filter } => list(&store, filter.as_deref()),
        Commands::Add(args) => add(&store, args),
        Commands::Update(args) => update(&store, args),
        Commands::Water { id } => complete(&store, &id, CareTaskType::Water),
        Commands::Fertilize { id } => complete(&store, &id, CareTaskType::Fertilize),
        Commands::Remove { id } => {
            store.remove(&id)?;
            println!("Removed {id}");
            Ok(())
        }
    }
}

fn list(store: &PlantStore, filter: Option<&str>) -> Result<()> {
    let plants = match filter {
        Some(token) => store.list_filtered(parse_status(token)?),
        None => store.list(),
    };

    if plants.is_empty() {
        println!("No plants yet. Add your first with `verdant add`.");
        return Ok(());
    }

    println!("{} total", plants.len());
    for plant in &plants {
        print_plant(plant);
    }
    Ok(())
}

fn print_plant(plant: &Plant) {
    println!("{}  {}", plant.id, plant.name);
    match &plant.room {
        Some(room) => println!("    {room} • {}", plant.category),
        None => println!("    {}", plant.category),
    }
    let next = next_due(plant)
        .map(|due| format!("{} · {}", due.task, due.label))
        .unwrap_or_else(|| "Schedule coming soon".to_string());
    println!("    next up: {next}");
}

fn add(store: &PlantStore, args: AddArgs) -> Result<()> {
    ensure!(!args.name.trim().is_empty(), "plant name must not be empty");
    let category = args.category.as_deref().map(parse_category).transpose()?;
    let water_days = args.water_days.map(|raw| {
        raw.split(',')
            .map(|day| day.trim().to_string())
            .filter(|day| !day.is_empty())
            .collect::<Vec<_>>()
    });

    let plant = store.add(PlantDraft {
        name: args.name,
        category,
        description: args.description,
        room: args.room,
        photo_uri: args.photo_uri,
        water_amount: args.water_amount,
        water_days,
    })?;
    println!("Added {} ({})", plant.name, plant.id);
    Ok(())
}

fn update(store: &PlantStore, args: UpdateArgs) -> Result<()> {
    if let Some(name) = &args.name {
        ensure!(!name.trim().is_empty(), "plant name must not be empty");
    }
    let plant = store.update(
        &args.id,
        PlantPatch {
            name: args.name,
            description: args.description,
            room: args.room,
            water_amount: args.water_amount,
            ..PlantPatch::default()
        },
    )?;
    println!("Updated {} ({})", plant.name, plant.id);
    Ok(())
}

fn complete(store: &PlantStore, id: &str, task: CareTaskType) -> Result<()> {
    let plant = store.complete(id, task)?;
    let next = next_due(&plant)
        .map(|due| format!("{} · {}", due.task, due.label))
        .unwrap_or_else(|| "Schedule coming soon".to_string());
    println!("Logged {task} for {}. Next up: {next}", plant.name);
    Ok(())
}

fn parse_category(token: &str) -> Result<PlantCategory> {
    match token.trim().to_ascii_lowercase().as_str() {
        "succulent" => Ok(PlantCategory::Succulent),
        "tropical" => Ok(PlantCategory::Tropical),
        "fern" => Ok(PlantCategory::Fern),
        "herb" => Ok(PlantCategory::Herb),
        "unknown" => Ok(PlantCategory::Unknown),
        other => bail!("unknown category `{other}` (expected succulent, tropical, fern, herb or unknown)"),
    }
}

fn parse_status(token: &str) -> Result<PlantStatus> {
    match token.trim().to_ascii_lowercase().as_str() {
        "upcoming" => Ok(PlantStatus::Upcoming),
        "forgot" => Ok(PlantStatus::Forgot),
        "history" => Ok(PlantStatus::History),
        other => bail!("unknown filter `{other}` (expected upcoming, forgot or history)"),
    }
}
