//! Plain-text rendering of the board, party status and event messages.

use combat::{CombatResult, HERO_NAME};
use dungeon::{Column, Coord, Room};
use hero::ChestEffect;
use strum::IntoEnumIterator;

use crate::movement::{DiceThrow, MoveOutcome};
use crate::room_events::{ArrivalReport, RoomEvent};
use crate::session::{GameStatus, LossReason, Session};

const RULE: &str =
    "---------------------------------------------------------------------------------------------------";

pub fn menu() -> String {
    [
        "Welcome to the Archangel's Dungeon!",
        "1. Start a new game",
        "2. Load saved game",
        "3. Quit",
    ]
    .join("\n")
}

pub fn intro() -> String {
    [
        "-------------------------------------------------------------------------------",
        "                  A New Adventure",
        "-------------------------------------------------------------------------------",
        "In the ancestral lands of Erresire, a young orc, brave and determined,",
        "sets out for the mysterious Dungeon of the Archangel.",
        "His goal: defeat the legendary Archangel and claim its power,",
        "which would make him the supreme lord of the continent.",
        "With a beginner's spellbook in one hand and burning resolve in his heart,",
        "Erresire descends into the depths, hoping to forge his own destiny.",
        "-------------------------------------------------------------------------------",
    ]
    .join("\n")
}

/// Glyph for one cell, highest priority first
fn cell(room: &Room, hero_at: Coord) -> &'static str {
    if room.coord == hero_at {
        "[x]"
    } else if room.visited {
        "[.]"
    } else if room.has_enemy {
        "[E]"
    } else if room.has_save_point {
        "[S]"
    } else if room.has_tavern {
        "[T]"
    } else if room.has_chest {
        "[C]"
    } else {
        "[ ]"
    }
}

pub fn board(session: &Session) -> String {
    let mut out = format!("{}\nDungeon - floor {}:\n", RULE, session.floor_number());

    let header: Vec<String> = Column::iter().map(|c| c.to_string()).collect();
    out.push_str(&format!("    {}\n", header.join("   ")));

    for row in 1..=Coord::ROWS {
        let cells: Vec<&str> = Column::iter()
            .map(|column| cell(session.floor.room(Coord { column, row }), session.hero.position))
            .collect();
        out.push_str(&format!("{:<2} {}\n", row, cells.join(" ")));
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&status(session));
    out
}

pub fn status(session: &Session) -> String {
    let hero = &session.hero;
    let mut out = format!(
        "\nPlayer status:\n - Health: {}\n - Attack power: {}\n - Team:\n",
        hero.health, hero.attack_power
    );
    for recruit in hero.team() {
        out.push_str(&format!(
            "   * Name: {}, Health: {}, Attack power: {}\n",
            recruit.name, recruit.health, recruit.attack_power
        ));
    }
    out.push_str(&format!(" - Dice throws used: {}\n", session.dice_throws));
    out
}

pub fn dice(throw: &DiceThrow) -> String {
    format!(
        "You rolled {} and {}. You may advance {} steps.",
        throw.first,
        throw.second,
        throw.total()
    )
}

fn combat_log(result: &CombatResult, out: &mut Vec<String>) {
    out.extend(result.logs.iter().cloned());
}

fn room_event(event: &RoomEvent, out: &mut Vec<String>) {
    match event {
        RoomEvent::Fought(result) => {
            out.push("You ran into an enemy! Prepare to fight!".to_string());
            combat_log(result, out);
        }
        RoomEvent::Saved => {
            out.push("You found a save point. Your progress has been saved.".to_string())
        }
        RoomEvent::SaveFailed(e) => out.push(format!(
            "You found a save point, but saving failed: {}",
            error::handle_error(e)
        )),
        RoomEvent::Recruited(recruit) => out.push(format!(
            "You found a tavern. {} joins your team!",
            recruit.name
        )),
        RoomEvent::TeamFull => {
            out.push("You found a tavern, but your team is already full.".to_string())
        }
        RoomEvent::ChestOpened(effect) => out.push(match effect {
            ChestEffect::Weapon => {
                "You found a chest with a weapon! Your party's attack rises.".to_string()
            }
            ChestEffect::Vitality => {
                "You found a chest with a health boost for the whole party!".to_string()
            }
            ChestEffect::Recovery { healed } => {
                format!("You found a chest with a remedy. {} recovers {} health.", HERO_NAME, healed)
            }
        }),
    }
}

pub fn arrival(report: &ArrivalReport) -> Vec<String> {
    let mut out = Vec::new();
    for event in &report.events {
        room_event(event, &mut out);
    }
    out
}

/// Messages describing what a move did
pub fn outcome(outcome: &MoveOutcome) -> Vec<String> {
    match outcome {
        MoveOutcome::Arrived {
            rejected_steps,
            report,
            ..
        } => {
            let mut out = Vec::new();
            if *rejected_steps > 0 {
                out.push(format!(
                    "Invalid direction: {} steps were spent without moving.",
                    rejected_steps
                ));
            }
            out.extend(arrival(report));
            out
        }
        MoveOutcome::FloorTransition { floor, .. } => vec![format!(
            "You reached the exit of the floor (J10)! Entering floor {}.",
            floor
        )],
        MoveOutcome::BossEncounter(result) => {
            let mut out = vec![
                "You found the Archangel! Prepare for the final battle!".to_string(),
            ];
            combat_log(result, &mut out);
            out
        }
    }
}

/// Final words for a finished session
pub fn verdict(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Active => None,
        GameStatus::Won => Some("You defeated the Archangel! Congratulations, you conquered the dungeon."),
        GameStatus::Lost(LossReason::SlainByBoss) => Some("The Archangel has defeated you! Try again."),
        GameStatus::Lost(LossReason::Slain) => Some("The enemy has defeated you! Try again!"),
        GameStatus::Lost(LossReason::DiceExhausted) => {
            Some("You exceeded the allowed number of dice throws. You lost the game!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Rules, Session};
    use dungeon::Floor;
    use hero::Hero;
    use save::PlayerRecord;

    fn session_on(floor: Floor, at: &str) -> Session {
        let record = PlayerRecord {
            hero: Hero::with_stats(3, 3, at.parse().unwrap()),
            dice_throws: 2,
        };
        Session::restore(Rules::default(), floor, record)
    }

    #[test]
    fn board_marks_player_visits_and_events() {
        let mut floor = Floor::blank(1);
        floor.room_mut("B1".parse().unwrap()).place_enemy();
        floor.room_mut("C1".parse().unwrap()).has_tavern = true;
        floor.room_mut("D1".parse().unwrap()).place_chest(1);
        floor.room_mut("E1".parse().unwrap()).has_save_point = true;
        floor.room_mut("A1".parse().unwrap()).visited = true;

        let text = board(&session_on(floor, "A2"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Dungeon - floor 1:");
        assert_eq!(lines[2], "    A   B   C   D   E   F   G   H   I   J");
        assert!(lines[3].starts_with("1  [.] [E] [T] [C] [S] [ ]"));
        assert!(lines[4].starts_with("2  [x] [ ]"));
        assert!(lines[12].starts_with("10 [ ]"));
        assert!(text.contains(" - Dice throws used: 2"));
    }

    #[test]
    fn status_lists_each_recruit() {
        let mut session = session_on(Floor::blank(2), "A1");
        session
            .hero
            .recruit(hero::TAVERN_POOL[0].instantiate())
            .unwrap();

        let text = status(&session);
        assert_eq!(
            text,
            "\nPlayer status:\n - Health: 3\n - Attack power: 3\n - Team:\n   * Name: Brann, Health: 5, Attack power: 5\n - Dice throws used: 2\n"
        );
        assert!(board(&session).ends_with(&text));
    }

    #[test]
    fn every_outcome_has_a_verdict() {
        assert!(verdict(GameStatus::Active).is_none());
        assert!(verdict(GameStatus::Won).unwrap().contains("defeated the Archangel"));
        assert!(verdict(GameStatus::Lost(LossReason::DiceExhausted))
            .unwrap()
            .contains("dice throws"));
    }
}
