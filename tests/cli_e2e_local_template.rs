//! End-to-end tests for provisioning from a local template archive.
//!
//! None of these tests touch the network: a local archive bypasses the
//! release feed entirely.

mod common;
use common::prelude::*;

use std::fs;

#[test]
fn test_local_template_full_run() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracting..."))
        .stdout(predicate::str::contains("Copied project files to Xcode template."))
        .stdout(predicate::str::contains(
            "Done! Open the Xcode project under \"pygame-ios-template\"",
        ));

    let app = fixture.app_path();
    assert!(app.join("assets/sprite.png").is_file());
    assert!(!app.join("game.py").exists());
    assert_eq!(fs::read(app.join("__main__.py")).unwrap(), b"import pygame\n");
    assert!(app.join("../main.m").is_file());
    assert!(!app.join("pygame-ios-template").exists());
}

#[test]
fn test_template_option_without_version() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["--template", "template.zip", "game", "game.py"])
        .assert()
        .success();

    assert!(fixture.app_path().join("__main__.py").is_file());
}

#[test]
fn test_existing_template_is_skipped() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success();

    // The archive is gone, so a second extraction would fail
    fs::remove_file(fixture.archive_path()).unwrap();

    fixture
        .command()
        .args(["game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pygame-ios template already exists. Skipping.",
        ));
}

#[test]
fn test_rerun_reflects_current_project() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success();

    fs::remove_file(fixture.project_path().join("assets/sprite.png")).unwrap();
    fixture
        .child("game/levels/one.json")
        .write_str("{}")
        .unwrap();

    fixture
        .command()
        .args(["game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success();

    let app = fixture.app_path();
    assert!(!app.join("assets/sprite.png").exists());
    assert!(app.join("levels/one.json").is_file());
    assert!(app.join("__main__.py").is_file());
}

#[test]
fn test_missing_entry_script_fails() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["game", "nope.py", "2.5.3", "template.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry script not found"));
}

#[test]
fn test_quiet_suppresses_progress() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["--quiet", "game", "game.py", "2.5.3", "template.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracting...").not())
        .stdout(predicate::str::contains("Done!"));
}

#[test]
fn test_usage_has_no_side_effects() {
    let fixture = TestFixture::new().with_project().with_template_archive();

    fixture
        .command()
        .args(["game"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    fixture
        .child("game/pygame-ios-template")
        .assert(predicate::path::missing());
}
