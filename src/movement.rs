//! Dice-driven movement across the floor grid.
//!
//! A turn goes `Idle -> AwaitingDirection -> Stepping` and ends in one of
//! the [`MoveOutcome`] variants. [`throw_dice`] covers the first transition,
//! the caller collects a direction, then [`advance`] consumes the steps one
//! at a time. [`enforce_throw_limit`] runs after the move has resolved.

use combat::{Archangel, Combat, CombatResult};
use dungeon::{Coord, Direction, RandomSource};
use log::{debug, info, warn};
use save::SaveGateway;

use crate::room_events::{self, ArrivalReport};
use crate::session::{GameStatus, LossReason, Session};

/// Movement constants
pub mod constants {
    /// Faces on each of the two movement dice
    pub const DIE_SIDES: u32 = 6;
}

/// Result of throwing the two movement dice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceThrow {
    pub first: u32,
    pub second: u32,
}

impl DiceThrow {
    /// Step budget, 2..=12
    pub fn total(&self) -> u32 {
        self.first + self.second
    }
}

#[derive(Debug)]
pub enum MoveOutcome {
    /// All steps spent; the hero now occupies `to` and its events were applied
    Arrived {
        from: Coord,
        to: Coord,
        /// Steps spent without moving because the direction was not recognised
        rejected_steps: u32,
        report: ArrivalReport,
    },
    /// Reached the exit of a regular floor
    FloorTransition {
        floor: u32,
        discarded_steps: u32,
    },
    /// Reached the exit of the final floor and fought the Archangel
    BossEncounter(CombatResult),
}

/// Throw both dice and count the throw against the session budget
pub fn throw_dice(session: &mut Session, rng: &mut dyn RandomSource) -> DiceThrow {
    let throw = DiceThrow {
        first: rng.die(constants::DIE_SIDES),
        second: rng.die(constants::DIE_SIDES),
    };
    session.dice_throws += 1;
    debug!(
        "dice {} + {} = {} (throw #{})",
        throw.first,
        throw.second,
        throw.total(),
        session.dice_throws
    );
    throw
}

/// Walk `steps` unit steps in `direction`.
///
/// `None` stands for a key that is not W/A/S/D: every step is still spent
/// but the hero stays put. Steps against the edge of the grid are absorbed.
/// Landing on the exit room ends the move at once, dropping remaining steps.
pub fn advance(
    session: &mut Session,
    direction: Option<Direction>,
    steps: u32,
    rng: &mut dyn RandomSource,
    gateway: &mut dyn SaveGateway,
) -> MoveOutcome {
    let from = session.hero.position;
    let mut at = from;
    let mut rejected_steps = 0;

    for taken in 1..=steps {
        match direction {
            Some(direction) => at = at.step(direction),
            None => rejected_steps += 1,
        }

        if at.is_exit() {
            let discarded_steps = steps - taken;
            if session.is_final_floor() {
                info!("reached the Archangel on floor {}", session.floor_number());
                return MoveOutcome::BossEncounter(fight_boss(session, rng));
            }
            session.advance_floor(rng);
            return MoveOutcome::FloorTransition {
                floor: session.floor_number(),
                discarded_steps,
            };
        }
    }

    if rejected_steps > 0 {
        warn!("{} steps spent on an unrecognised direction", rejected_steps);
    }

    session.relocate(at);
    let report = room_events::apply_arrival(session, rng, gateway);
    MoveOutcome::Arrived {
        from,
        to: at,
        rejected_steps,
        report,
    }
}

fn fight_boss(session: &mut Session, rng: &mut dyn RandomSource) -> CombatResult {
    let mut boss = Archangel::new();
    let result = Combat::resolve(&mut session.hero, &mut boss, rng);
    session.finish(if result.party_won() {
        GameStatus::Won
    } else {
        GameStatus::Lost(LossReason::SlainByBoss)
    });
    result
}

/// End the session once more than the allowed number of throws were used.
///
/// Returns true when this call ended the session.
pub fn enforce_throw_limit(session: &mut Session) -> bool {
    if session.is_active() && session.dice_throws > session.rules.max_dice_throws {
        info!(
            "dice budget exhausted ({} > {})",
            session.dice_throws, session.rules.max_dice_throws
        );
        session.finish(GameStatus::Lost(LossReason::DiceExhausted));
        return true;
    }
    false
}
