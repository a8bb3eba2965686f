//! Headless dungeon client.
//!
//! Loads content, builds a session and lets the autopilot play it until the
//! hero dies or the step limit is reached. Events go to stdout, logs to
//! stderr (filtered by `RUST_LOG`).
mod config;
mod narration;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::Combatant;
use runtime::{AutopilotProvider, Session};

use config::CliConfig;
use narration::narrate;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting dungeon run with seed {}", seed);

    let factory = ContentFactory::new(config.data_dir.clone());
    let mut game_config = factory
        .load_config()
        .with_context(|| format!("loading config from {}", config.data_dir.display()))?;
    if let Some(name) = &config.hero_name {
        game_config.hero_name = name.clone();
    }
    let catalog = factory.load_items().context("loading item catalog")?;
    let floors = factory.load_floors().context("loading floors")?;
    tracing::info!("Loaded {} items and {} floors", catalog.len(), floors.len());

    let mut session = Session::from_content(game_config, catalog, floors, seed)?;
    let mut provider = AutopilotProvider::new(seed.rotate_left(17));

    let summary = session.run(&mut provider, config.max_steps, |event| {
        println!("{}", narrate(event));
    })?;
    if config.show_map {
        println!("{}", session.map().render(session.hero().position()));
    }

    let hero = session.hero();
    let stats = hero.stats();
    println!(
        "{} reached floor {} at level {} with {}/{} HP and {} gold after {} steps ({:?}).",
        stats.name(),
        session.floor(),
        stats.level(),
        stats.hp(),
        stats.max_hp(),
        hero.gold(),
        summary.steps,
        summary.reason
    );
    Ok(())
}
