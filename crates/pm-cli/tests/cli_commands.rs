//! Integration tests for the pm CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with mini-game content.
fn test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("game_data.json"),
        r#"{
    "Secret_words": ["ghost"],
    "Riddles": { "What has keys but can't open locks?": "piano" }
}
"#,
    )
    .unwrap();
    dir
}

fn poirot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("poirot").unwrap();
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("--content")
        .arg(dir.path().join("game_data.json"))
        .arg("--log-file")
        .arg(dir.path().join("log_file"))
        .args(["--seed", "7", "--reveal-delay", "0"]);
    cmd
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn register_and_quit_writes_stores_and_log() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("THE POIROT MYSTERY"))
        .stdout(predicate::str::contains("Welcome to 'The Poirot Mystery'"))
        .stdout(predicate::str::contains("Registration successful"))
        .stdout(predicate::str::contains("Game Over! Your final score was 0"))
        .stdout(predicate::str::contains("holmes"));

    let accounts = fs::read_to_string(dir.path().join("user_data.json")).unwrap();
    assert!(accounts.contains("\"holmes\""));
    assert!(!accounts.contains("pw1"));
    assert!(dir.path().join("progress.json").exists());

    let log = fs::read_to_string(dir.path().join("log_file")).unwrap();
    assert!(log.contains("Player input is q"));
}

#[test]
fn name_and_examine_the_scene() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\ns\nHercule\ne\n1\nd\nx\nb\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome Hercule"))
        .stdout(predicate::str::contains("Torn Fabric"))
        .stdout(predicate::str::contains("Game Over! Your final score was 4"))
        .stdout(predicate::str::contains("Hercule"));
}

#[test]
fn welcome_is_shown_before_sign_in() {
    let dir = test_dir();
    let assert = poirot(&dir).write_stdin("x\ny\nz\n").assert().failure();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let welcome = out
        .find("You are about to embark on a thrilling adventure")
        .unwrap();
    let prompt = out.find("Press R to register or L to login").unwrap();
    assert!(welcome < prompt);
}

#[test]
fn invalid_keys_are_reported_and_play_continues() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\nz\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Over!"));
}

#[test]
fn end_of_input_abandons_without_saving() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\ns\nHercule\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress was not saved"));
    assert!(!dir.path().join("progress.json").exists());
}

// ---------------------------------------------------------------------------
// sign in
// ---------------------------------------------------------------------------

#[test]
fn duplicate_registration_is_refused() {
    let dir = test_dir();
    poirot(&dir).write_stdin("R\nholmes\npw1\nq\n").assert().success();

    poirot(&dir)
        .write_stdin("R\nHolmes\nother\nL\nholmes\npw1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already taken"))
        .stdout(predicate::str::contains("Login successful"));
}

#[test]
fn returning_player_restores_progress() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\ns\nHercule\ne\n1\nk\ny\ny\ny\nb\nq\n")
        .assert()
        .success();

    poirot(&dir)
        .write_stdin("L\nholmes\npw1\ns\nr\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back Hercule"))
        .stdout(predicate::str::contains("You review your clues:"))
        .stdout(predicate::str::contains("didn't exit properly").not());
}

#[test]
fn wrong_passwords_exhaust_login() {
    let dir = test_dir();
    poirot(&dir).write_stdin("R\nholmes\npw1\nq\n").assert().success();

    poirot(&dir)
        .write_stdin("L\nholmes\nbad\nbad\nbad\nbad\nbad\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Incorrect password,4 attempts left"))
        .stdout(predicate::str::contains("Incorrect password,1 attempts left"))
        .stderr(predicate::str::contains("error: could not sign in"));
}

#[test]
fn retry_password_succeeds() {
    let dir = test_dir();
    poirot(&dir).write_stdin("R\nholmes\npw1\nq\n").assert().success();

    poirot(&dir)
        .write_stdin("L\nholmes\nbad\npw1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));
}

#[test]
fn three_bad_choices_give_up() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("x\ny\nz\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not sign in"));
}

// ---------------------------------------------------------------------------
// leaderboard
// ---------------------------------------------------------------------------

#[test]
fn leaderboard_empty() {
    let dir = test_dir();
    poirot(&dir)
        .arg("leaderboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No detectives on the board yet"));
}

#[test]
fn leaderboard_ranks_players() {
    let dir = test_dir();
    poirot(&dir)
        .write_stdin("R\nholmes\npw1\ns\nHercule\ne\n1\nd\nx\nb\nb\nq\n")
        .assert()
        .success();
    poirot(&dir).write_stdin("R\nmarple\npw2\nq\n").assert().success();

    poirot(&dir)
        .args(["leaderboard", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hercule"))
        .stdout(predicate::str::contains("marple").not());
}
