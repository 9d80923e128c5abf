//! Game configuration, read from `dungeon.json` when present.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use save::SaveSystem;
use serde::{Deserialize, Serialize};

use crate::session::Rules;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "dungeon.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Directory holding both save files
    pub dir: String,
    pub grid_file: String,
    pub player_file: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            grid_file: save::GRID_FILE.to_string(),
            player_file: save::PLAYER_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub final_floor: u32,
    pub max_dice_throws: u32,
    pub enemy_cap: u32,
    pub save: SaveConfig,
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            final_floor: rules.final_floor,
            max_dice_throws: rules.max_dice_throws,
            enemy_cap: rules.enemy_cap,
            save: SaveConfig::default(),
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.final_floor >= 1, "final_floor must be at least 1");
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules {
            final_floor: self.final_floor,
            max_dice_throws: self.max_dice_throws,
            enemy_cap: self.enemy_cap,
        }
    }

    pub fn save_system(&self) -> SaveSystem {
        SaveSystem::with_files(&self.save.dir, &self.save.grid_file, &self.save.player_file)
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
