#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Build a campushub command with HOME pointed at a per-test directory, so
/// the real user config is never read or written.
pub fn hub(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("campushub");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test HOME inside the system temp dir.
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_campushub_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_campushub.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh home + initialized DB, ready for commands.
pub fn setup(name: &str) -> (String, String) {
    let home = setup_test_home(name);
    let db = setup_test_db(name);

    hub(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    (home, db)
}

/// Add one event through the CLI acting as `user`.
pub fn add_event(home: &str, db: &str, user: &str, title: &str, date: &str, category: &str) {
    hub(home)
        .args([
            "--db", db, "--test", "--as", user, "events", "add", "--title", title, "--date",
            date, "--category", category,
        ])
        .assert()
        .success();
}
