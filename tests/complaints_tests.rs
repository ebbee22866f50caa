use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{hub, setup};

fn add_complaint(home: &str, db: &str, user: &str, title: &str, desc: &str, category: &str) {
    hub(home)
        .args([
            "--db",
            db,
            "--test",
            "--as",
            user,
            "complaints",
            "add",
            "--title",
            title,
            "--description",
            desc,
            "--category",
            category,
        ])
        .assert()
        .success();
}

#[test]
fn test_submitted_complaint_is_pending_and_owner_scoped() {
    let (home, db) = setup("complaints_scope");

    add_complaint(
        &home,
        &db,
        "u-alice",
        "Leaky faucet",
        "Room 214 tap drips all night",
        "hostel",
    );

    // Identity A sees exactly one record, status Pending.
    let out = hub(&home)
        .args([
            "--db", &db, "--test", "--as", "u-alice", "complaints", "list", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Leaky faucet");
    assert_eq!(rows[0]["category"], "Hostel");
    assert_eq!(rows[0]["status"], "Pending");
    assert_eq!(rows[0]["user_id"], "u-alice");

    // Identity B, never having submitted, sees zero records.
    hub(&home)
        .args(["--db", &db, "--test", "--as", "u-bob", "complaints", "list"])
        .assert()
        .success()
        .stdout(contains("No complaints submitted yet"));
}

#[test]
fn test_add_requires_sign_in_and_writes_nothing() {
    let (home, db) = setup("complaints_auth");

    hub(&home)
        .args([
            "--db",
            &db,
            "--test",
            "complaints",
            "add",
            "--title",
            "Broken window",
            "--description",
            "Common room, second floor",
        ])
        .assert()
        .failure()
        .stderr(contains("signed in"));

    hub(&home)
        .args(["--db", &db, "--test", "--as", "u-alice", "complaints", "list"])
        .assert()
        .success()
        .stdout(contains("No complaints submitted yet"));
}

#[test]
fn test_list_without_identity_warns_and_shows_nothing() {
    let (home, db) = setup("complaints_anon_list");

    add_complaint(&home, &db, "u-alice", "Wifi down", "Block C has no wifi", "other");

    hub(&home)
        .args(["--db", &db, "--test", "complaints", "list"])
        .assert()
        .success()
        .stdout(contains("Sign in"))
        .stdout(contains("Wifi down").not());
}

#[test]
fn test_newest_complaint_listed_first() {
    let (home, db) = setup("complaints_order");

    add_complaint(&home, &db, "u-alice", "First filed", "older", "other");
    std::thread::sleep(std::time::Duration::from_millis(1100));
    add_complaint(&home, &db, "u-alice", "Second filed", "newer", "other");

    let out = hub(&home)
        .args([
            "--db", &db, "--test", "--as", "u-alice", "complaints", "list", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Second filed", "First filed"]);
}

#[test]
fn test_default_category_is_other() {
    let (home, db) = setup("complaints_default_cat");

    hub(&home)
        .args([
            "--db",
            &db,
            "--test",
            "--as",
            "u-alice",
            "complaints",
            "add",
            "--title",
            "Lost key",
            "--description",
            "Left it in the library",
        ])
        .assert()
        .success();

    let out = hub(&home)
        .args([
            "--db", &db, "--test", "--as", "u-alice", "complaints", "list", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json.as_array().unwrap()[0]["category"], "Other");
}
