use std::io;

use anyhow::Context;
use archangel_dungeon::{
    config::{CONFIG_FILE, GameConfig},
    game_loop::GameLoop,
    input::LineInput,
};
use dungeon::DungeonRng;
use log::info;

fn init_logging(config: &GameConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = GameConfig::load_or_default(CONFIG_FILE).context("Failed to load configuration")?;
    init_logging(&config);

    let rng = match config.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    info!("session seed {}", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = GameLoop::new(
        LineInput::new(stdin.lock()),
        stdout.lock(),
        rng,
        config.save_system(),
        config.rules(),
    );
    game.run()?;
    Ok(())
}
