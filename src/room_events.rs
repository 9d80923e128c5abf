//! Applies the events of the room the hero just arrived in.
//!
//! Checks run in a fixed order (enemy, save point, tavern, chest) and a
//! single arrival may trigger several of them. Every applied event is
//! recorded in an [`ArrivalReport`] so the caller decides how to show it.

use combat::{Combat, CombatResult, Enemy};
use dungeon::{Coord, RandomSource};
use error::GameError;
use hero::{ChestEffect, HeroError, Recruit};
use log::{debug, warn};
use save::SaveGateway;

use crate::session::{GameStatus, LossReason, Session};

#[derive(Debug)]
pub enum RoomEvent {
    /// Fought the room's enemy
    Fought(CombatResult),
    /// Progress written at a save point
    Saved,
    /// The save point could not write the save files
    SaveFailed(GameError),
    Recruited(Recruit),
    /// Tavern visited with a full team
    TeamFull,
    ChestOpened(ChestEffect),
}

#[derive(Debug)]
pub struct ArrivalReport {
    pub coord: Coord,
    pub events: Vec<RoomEvent>,
}

impl ArrivalReport {
    pub fn is_quiet(&self) -> bool {
        self.events.is_empty()
    }
}

/// Apply the current room's events to the party.
///
/// Enemy, tavern and chest flags are consumed; the save point stays and
/// saves again on every visit. Nothing after the fight runs if the hero
/// fell in it.
pub fn apply_arrival(
    session: &mut Session,
    rng: &mut dyn RandomSource,
    gateway: &mut dyn SaveGateway,
) -> ArrivalReport {
    let coord = session.hero.position;
    let mut events = Vec::new();

    if session.current_room().has_enemy {
        let mut enemy = Enemy::from_room(session.current_room());
        let result = Combat::resolve(&mut session.hero, &mut enemy, rng);

        let room = session.current_room_mut();
        enemy.write_back(room);
        room.has_enemy = false;

        let fell = !result.party_won();
        events.push(RoomEvent::Fought(result));
        if fell {
            session.finish(GameStatus::Lost(LossReason::Slain));
            return ArrivalReport { coord, events };
        }
    }

    if session.current_room().has_save_point {
        match session.save(gateway) {
            Ok(()) => events.push(RoomEvent::Saved),
            Err(e) => {
                warn!("save point at {} failed: {}", coord, e);
                events.push(RoomEvent::SaveFailed(e));
            }
        }
        session.current_room_mut().visited = true;
    }

    if session.current_room().has_tavern {
        match session.hero.recruit_from_tavern(rng) {
            Ok(recruit) => events.push(RoomEvent::Recruited(recruit)),
            Err(HeroError::TeamFull { .. }) => events.push(RoomEvent::TeamFull),
        }
        session.current_room_mut().has_tavern = false;
    }

    if session.current_room().has_chest {
        let content = session.current_room().chest_content;
        if let Some(effect) = session.hero.open_chest(content) {
            events.push(RoomEvent::ChestOpened(effect));
        }
        session.current_room_mut().has_chest = false;
    }

    debug!("arrival at {}: {} events", coord, events.len());
    ArrivalReport { coord, events }
}
