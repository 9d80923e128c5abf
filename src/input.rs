//! Line-oriented input: the main menu choice and the movement direction.

use std::io::BufRead;

use dungeon::Direction;
use error::GameError;

/// Trait for input sources
pub trait InputSource {
    /// Block until a full line is available; `None` once input is closed
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Reads lines from any buffered reader (stdin in the real game)
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    /// Bytes that are not UTF-8 (e.g. a Latin-1 console) become U+FFFD and
    /// are rejected later as invalid input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Main menu options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    LoadGame,
    Quit,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Result<Self, GameError> {
        match line.trim() {
            "1" => Ok(MenuChoice::NewGame),
            "2" => Ok(MenuChoice::LoadGame),
            "3" => Ok(MenuChoice::Quit),
            other => Err(GameError::InvalidInput(format!("menu option '{}'", other))),
        }
    }
}

/// Whether a line carries no key at all (the player only pressed Enter)
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Direction from the first non-blank character of the line (W/A/S/D, upper case only)
pub fn parse_direction(line: &str) -> Result<Direction, GameError> {
    let key = line
        .trim_start()
        .chars()
        .next()
        .ok_or_else(|| GameError::InvalidInput("empty direction".to_string()))?;
    Direction::from_key(key)
        .ok_or_else(|| GameError::InvalidInput(format!("direction '{}'", key)))
}
