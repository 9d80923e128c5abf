#![allow(dead_code)]

//! Test helpers: scripted randomness and an in-memory save gateway.

use std::collections::VecDeque;
use std::io;

use archangel_dungeon::session::{Rules, Session};
use dungeon::{DungeonRng, Floor, RandomSource};
use error::GameError;
use hero::Hero;
use save::{PlayerRecord, SaveGateway};

/// Replays scripted answers first and falls back to a seeded RNG afterwards
pub struct ScriptedRng {
    dice: VecDeque<u32>,
    coins: VecDeque<bool>,
    indices: VecDeque<usize>,
    fallback: DungeonRng,
}

impl ScriptedRng {
    pub fn new(seed: u64) -> Self {
        Self {
            dice: VecDeque::new(),
            coins: VecDeque::new(),
            indices: VecDeque::new(),
            fallback: DungeonRng::new(seed),
        }
    }

    pub fn dice(mut self, rolls: &[u32]) -> Self {
        self.dice.extend(rolls);
        self
    }

    pub fn coins(mut self, flips: &[bool]) -> Self {
        self.coins.extend(flips);
        self
    }

    pub fn indices(mut self, picks: &[usize]) -> Self {
        self.indices.extend(picks);
        self
    }
}

impl RandomSource for ScriptedRng {
    fn one_in(&mut self, n: u32) -> bool {
        self.fallback.one_in(n)
    }

    fn die(&mut self, sides: u32) -> u32 {
        self.dice.pop_front().unwrap_or_else(|| self.fallback.die(sides))
    }

    fn index(&mut self, len: usize) -> usize {
        match self.indices.pop_front() {
            Some(pick) => pick.min(len - 1),
            None => self.fallback.index(len),
        }
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or_else(|| self.fallback.coin())
    }
}

/// Keeps saves in memory
#[derive(Default)]
pub struct MemoryGateway {
    pub grid: Option<Floor>,
    pub player: Option<PlayerRecord>,
    pub saves: usize,
}

impl SaveGateway for MemoryGateway {
    fn save_grid(&mut self, floor: &Floor) -> Result<(), GameError> {
        self.grid = Some(floor.clone());
        self.saves += 1;
        Ok(())
    }

    fn load_grid(&mut self) -> Result<Floor, GameError> {
        self.grid
            .clone()
            .ok_or_else(|| GameError::io("memory-grid", io::Error::from(io::ErrorKind::NotFound)))
    }

    fn save_player(&mut self, hero: &Hero, dice_throws: u32) -> Result<(), GameError> {
        self.player = Some(PlayerRecord {
            hero: hero.clone(),
            dice_throws,
        });
        Ok(())
    }

    fn load_player(&mut self) -> Result<PlayerRecord, GameError> {
        self.player
            .clone()
            .ok_or_else(|| GameError::io("memory-player", io::Error::from(io::ErrorKind::NotFound)))
    }
}

/// Refuses every write
pub struct ReadOnlyGateway;

impl SaveGateway for ReadOnlyGateway {
    fn save_grid(&mut self, _floor: &Floor) -> Result<(), GameError> {
        Err(GameError::io("celdas.txt", io::Error::from(io::ErrorKind::PermissionDenied)))
    }

    fn load_grid(&mut self) -> Result<Floor, GameError> {
        Err(GameError::io("celdas.txt", io::Error::from(io::ErrorKind::NotFound)))
    }

    fn save_player(&mut self, _hero: &Hero, _dice_throws: u32) -> Result<(), GameError> {
        Err(GameError::io("jugador.txt", io::Error::from(io::ErrorKind::PermissionDenied)))
    }

    fn load_player(&mut self) -> Result<PlayerRecord, GameError> {
        Err(GameError::io("jugador.txt", io::Error::from(io::ErrorKind::NotFound)))
    }
}

/// Session on a hand-built floor with the hero standing at `at`
pub fn session_at(floor: Floor, at: &str, dice_throws: u32) -> Session {
    let record = PlayerRecord {
        hero: Hero::with_stats(Hero::START_HEALTH, Hero::START_ATTACK, at.parse().unwrap()),
        dice_throws,
    };
    Session::restore(Rules::default(), floor, record)
}
