mod helpers;

use archangel_dungeon::room_events::{self, RoomEvent};
use archangel_dungeon::session::{Rules, Session};
use dungeon::{Coord, DungeonRng};
use error::GameError;
use helpers::ScriptedRng;
use hero::TAVERN_POOL;
use pretty_assertions::assert_eq;
use save::{SaveGateway, SaveSystem};

#[test]
fn save_point_snapshot_restores_the_same_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut saves = SaveSystem::new(dir.path());

    let mut session = Session::new_game(Rules::default(), &mut DungeonRng::new(77));
    let spot: Coord = "G4".parse().unwrap();
    session.relocate(spot);
    session.current_room_mut().has_enemy = false;
    session.current_room_mut().has_tavern = false;
    session.current_room_mut().has_chest = false;
    session.current_room_mut().has_save_point = true;
    session.hero.recruit(TAVERN_POOL[1].instantiate()).unwrap();
    session.hero.recruit(TAVERN_POOL[4].instantiate()).unwrap();
    session.hero.health = 12;
    session.dice_throws = 6;

    let report = room_events::apply_arrival(&mut session, &mut ScriptedRng::new(1), &mut saves);
    assert!(matches!(report.events[..], [RoomEvent::Saved]));

    let restored = Session::load(Rules::default(), &mut saves).expect("load session");
    assert_eq!(restored.floor, session.floor);
    assert_eq!(restored.hero, session.hero);
    assert_eq!(restored.dice_throws, 6);
    assert_eq!(restored.floor_number(), 1);
    assert_eq!(restored.floor.player_coord(), Some(spot));
}

#[test]
fn later_floor_number_comes_back_from_the_grid() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut saves = SaveSystem::new(dir.path());
    let mut rng = DungeonRng::new(3);

    let mut session = Session::new_game(Rules::default(), &mut rng);
    session.advance_floor(&mut rng);
    session.advance_floor(&mut rng);
    session.save(&mut saves).expect("save");

    let restored = Session::load(Rules::default(), &mut saves).expect("load");
    assert_eq!(restored.floor_number(), 3);
    assert_eq!(restored.hero.position, Coord::START);
}

#[test]
fn loading_without_files_reports_io_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut saves = SaveSystem::new(dir.path());
    let err = Session::load(Rules::default(), &mut saves).unwrap_err();
    assert!(matches!(err, GameError::IoUnavailable { .. }));
    assert!(error::handle_error(&err).contains("does not exist"));
}

#[test]
fn loading_a_grid_without_player_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut saves = SaveSystem::new(dir.path());
    let session = Session::new_game(Rules::default(), &mut DungeonRng::new(8));
    saves.save_grid(&session.floor).expect("save grid");

    assert!(Session::load(Rules::default(), &mut saves).is_err());
}
