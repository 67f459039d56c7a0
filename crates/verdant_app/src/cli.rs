use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "verdant")]
#[command(about = "Track plant care schedules from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List plants with their next due task
    List {
        /// Show only one bucket: upcoming, forgot or history
        #[arg(long)]
        filter: Option<String>,
    },
    /// Add a new plant
    Add(AddArgs),
    /// Update fields on an existing plant
    Update(UpdateArgs),
    /// Mark a plant watered
    Water {
        /// Plant id
        id: String,
    },
    /// Mark a plant fertilized
    Fertilize {
        /// Plant id
        id: String,
    },
    /// Remove a plant
    Remove {
        /// Plant id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Plant name
    #[arg(short = 'n', long)]
    pub name: String,
    /// Category: succulent, tropical, fern, herb or unknown
    #[arg(short = 'c', long)]
    pub category: Option<String>,
    /// Room the plant lives in
    #[arg(long)]
    pub room: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub description: Option<String>,
    /// How much to water, e.g. "200ml"
    #[arg(long = "water-amount")]
    pub water_amount: Option<String>,
    /// Photo location, passed through untouched
    #[arg(long = "photo-uri")]
    pub photo_uri: Option<String>,
    /// Preferred watering weekdays, comma separated (display hint only)
    #[arg(long = "water-days")]
    pub water_days: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Plant id
    #[arg(long)]
    pub id: String,
    /// New name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// New room
    #[arg(long)]
    pub room: Option<String>,
    /// New notes
    #[arg(long)]
    pub description: Option<String>,
    /// New watering amount
    #[arg(long = "water-amount")]
    pub water_amount: Option<String>,
}
