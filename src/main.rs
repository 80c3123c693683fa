mod config;
mod data;
mod export;
mod logging;
mod metrics;
mod models;
mod palette;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "findash starting");

    let data = data::Dataset::sample();

    match args.len() {
        1 => run::as_tui(data),
        2.. => run::as_cli(&args, &data),
        _ => {
            eprintln!("Usage: findash [command]");
            Ok(())
        }
    }
}
