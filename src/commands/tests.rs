//! Unit tests for command handlers

use super::*;
use crate::Score;
use std::ffi::OsString;

fn create_test_db() -> PlayerDatabase {
    PlayerDatabase::new_in_memory().unwrap()
}

fn run(db: &mut PlayerDatabase, command: Commands) -> String {
    let mut out = Vec::new();
    dispatch(db, command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_database_path_defaults_to_working_directory() {
    assert_eq!(database_path_from(None), PathBuf::from("player.db"));
    assert_eq!(
        database_path_from(Some(OsString::new())),
        PathBuf::from("player.db")
    );
}

#[test]
fn test_database_path_from_env_value() {
    let path = database_path_from(Some(OsString::from("/tmp/scores/players.db")));
    assert_eq!(path, PathBuf::from("/tmp/scores/players.db"));
}

#[test]
fn test_list_empty_prints_only_header() {
    let mut db = create_test_db();
    assert_eq!(
        run(&mut db, Commands::List { extra: Vec::new() }),
        "id | name | score\n"
    );
}

#[test]
fn test_add_update_remove_list_sequence() {
    let mut db = create_test_db();

    let output = run(
        &mut db,
        Commands::Add {
            name: "Alice".to_string(),
            score: Score::new(10),
            extra: Vec::new(),
        },
    );
    assert!(output.is_empty());

    run(
        &mut db,
        Commands::Add {
            name: "Bob".to_string(),
            score: Score::default(),
            extra: Vec::new(),
        },
    );
    assert_eq!(
        run(&mut db, Commands::List { extra: Vec::new() }),
        "id | name | score\n1 | Alice | 10\n2 | Bob | 0\n"
    );

    run(
        &mut db,
        Commands::Update {
            id: PlayerId::new(1),
            score: Score::new(50),
            extra: Vec::new(),
        },
    );
    assert_eq!(
        run(&mut db, Commands::List { extra: Vec::new() }),
        "id | name | score\n1 | Alice | 50\n2 | Bob | 0\n"
    );

    run(
        &mut db,
        Commands::Remove {
            id: PlayerId::new(2),
            extra: Vec::new(),
        },
    );
    assert_eq!(
        run(&mut db, Commands::List { extra: Vec::new() }),
        "id | name | score\n1 | Alice | 50\n"
    );
}

#[test]
fn test_update_missing_row_is_not_an_error() {
    let mut db = create_test_db();
    let found = update_player::handle_update(&mut db, PlayerId::new(5), Score::new(1)).unwrap();
    assert!(!found);
    assert!(db.list_players().unwrap().is_empty());
}

#[test]
fn test_remove_missing_row_is_not_an_error() {
    let mut db = create_test_db();
    add_player::handle_add(&mut db, "Alice", Score::new(3)).unwrap();

    let found = remove_player::handle_remove(&mut db, PlayerId::new(5)).unwrap();
    assert!(!found);
    assert_eq!(db.list_players().unwrap().len(), 1);
}

#[test]
fn test_write_player_table_format() {
    let players = vec![crate::storage::Player {
        id: PlayerId::new(4),
        name: "Dana Smith".to_string(),
        score: Score::new(-2),
    }];
    let mut out = Vec::new();
    list_players::write_player_table(&players, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id | name | score\n4 | Dana Smith | -2\n"
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let mut db = create_test_db();

    run(
        &mut db,
        Commands::Add {
            name: "Alice".to_string(),
            score: Score::new(10),
            extra: vec!["extra".to_string()],
        },
    );
    let output = run(
        &mut db,
        Commands::List {
            extra: vec!["foo".to_string()],
        },
    );
    assert_eq!(output, "id | name | score\n1 | Alice | 10\n");
}
