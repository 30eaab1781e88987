use anyhow::Context;
use clap::Parser;
use duel_companion::cli::Cli;
use duel_companion::config::{Config, ConfigStore};
use duel_companion::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::info!("Starting duel with config {}", path.display());

    duel_companion::ui::run(ConfigStore::new(config, path)).context("Terminal UI failed")?;
    Ok(())
}
