use std::io::Cursor;

use archangel_dungeon::game_loop::GameLoop;
use archangel_dungeon::input::LineInput;
use archangel_dungeon::session::{GameStatus, LossReason, Rules, Session};
use dungeon::{Column, Coord, DungeonRng};
use save::SaveSystem;

fn run(script: &str, saves: SaveSystem, rules: Rules) -> (Option<Session>, String) {
    run_bytes(script.as_bytes(), saves, rules)
}

fn run_bytes(script: &[u8], saves: SaveSystem, rules: Rules) -> (Option<Session>, String) {
    let mut game = GameLoop::new(
        LineInput::new(Cursor::new(script.to_vec())),
        Vec::new(),
        DungeonRng::new(2024),
        saves,
        rules,
    );
    let session = game.run().expect("game loop");
    let output = String::from_utf8(game.into_output()).expect("utf-8 output");
    (session, output)
}

#[test]
fn quit_says_goodbye() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run("3\n", SaveSystem::new(dir.path()), Rules::default());
    assert!(session.is_none());
    assert!(output.contains("1. Start a new game"));
    assert!(output.contains("Thanks for playing"));
}

#[test]
fn unknown_option_leaves_the_game() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run("7\n", SaveSystem::new(dir.path()), Rules::default());
    assert!(session.is_none());
    assert!(output.contains("Invalid option"));
}

#[test]
fn load_without_save_reports_and_exits() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run("2\n", SaveSystem::new(dir.path()), Rules::default());
    assert!(session.is_none());
    assert!(output.contains("Could not load the saved game"));
}

#[test]
fn new_game_shows_intro_board_and_stops_when_input_ends() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run("1\n\n", SaveSystem::new(dir.path()), Rules::default());
    let session = session.expect("session started");
    assert!(session.is_active());
    assert!(output.contains("A New Adventure"));
    assert!(output.contains("Dungeon - floor 1:"));
    assert!(output.contains("Press Enter to roll the dice"));
}

#[test]
fn exceeding_the_throw_budget_loses() {
    let dir = tempfile::tempdir().unwrap();
    let rules = Rules {
        max_dice_throws: 0,
        ..Rules::default()
    };
    // menu, intro, roll, invalid direction
    let (session, output) = run("1\n\n\nQ\n", SaveSystem::new(dir.path()), rules);
    let session = session.expect("session started");

    assert_eq!(session.dice_throws, 1);
    assert_eq!(session.hero.position, Coord::START);
    assert!(output.contains("Invalid direction"));
    // a floor-1 enemy cannot kill a fresh hero, so the dice budget decides
    assert_eq!(session.status, GameStatus::Lost(LossReason::DiceExhausted));
    assert!(output.contains("exceeded the allowed number of dice throws"));
}

#[test]
fn saved_game_can_be_loaded_from_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let mut saves = SaveSystem::new(dir.path());
    let mut session = Session::new_game(Rules::default(), &mut DungeonRng::new(5));
    session.relocate("B7".parse().unwrap());
    session.dice_throws = 3;
    session.save(&mut saves).unwrap();

    let (loaded, output) = run("2\n", saves, Rules::default());
    let loaded = loaded.expect("session loaded");
    assert!(output.contains("Saved game loaded."));
    assert_eq!(loaded.hero.position, "B7".parse::<Coord>().unwrap());
    assert_eq!(loaded.dice_throws, 3);
}

#[test]
fn latin1_menu_byte_is_an_invalid_option() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_bytes(b"\xff\n", SaveSystem::new(dir.path()), Rules::default());
    assert!(session.is_none());
    assert!(output.contains("Invalid option"));
}

#[test]
fn latin1_direction_byte_spends_the_steps() {
    let dir = tempfile::tempdir().unwrap();
    // menu, intro, roll, 'é' in Latin-1
    let (session, output) =
        run_bytes(b"1\n\n\n\xe9\n", SaveSystem::new(dir.path()), Rules::default());
    let session = session.expect("session started");

    assert_eq!(session.dice_throws, 1);
    assert_eq!(session.hero.position, Coord::START);
    assert!(output.contains("Invalid direction"));
}

#[test]
fn blank_direction_line_prompts_again() {
    let dir = tempfile::tempdir().unwrap();
    // menu, intro, roll, bare Enter at the direction prompt, then D
    let (session, output) = run("1\n\n\n\nD\n", SaveSystem::new(dir.path()), Rules::default());
    let session = session.expect("session started");

    assert_eq!(session.dice_throws, 1);
    assert_eq!(session.hero.position.row, 1);
    assert_ne!(session.hero.position.column, Column::A);
    assert!(!output.contains("Invalid direction"));
    assert_eq!(output.matches("Choose a direction to move").count(), 2);
}
