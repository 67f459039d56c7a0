use clap::Parser;

mod app;
mod cli;

use app::{run, AppConfig};
use cli::Cli;

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = AppConfig::from_env().unwrap_or_default();
    if let Err(err) = run(config, cli) {
        eprintln!("verdant: {err:#}");
        std::process::exit(1);
    }
}
