use predicates::str::contains;

mod common;
use common::{add_event, hub, setup};

#[test]
fn test_add_requires_sign_in() {
    let (home, db) = setup("events_auth");

    hub(&home)
        .args([
            "--db",
            &db,
            "--test",
            "events",
            "add",
            "--title",
            "Orientation",
            "--date",
            "2099-09-01 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("signed in"));

    // Nothing was written.
    hub(&home)
        .args(["--db", &db, "--test", "events", "list"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_list_is_public_and_shows_created_event() {
    let (home, db) = setup("events_public");

    add_event(&home, &db, "u-alice", "Tech Talk", "2099-10-01 18:00", "academics");

    // No identity needed to read events.
    hub(&home)
        .args(["--db", &db, "--test", "events", "list"])
        .assert()
        .success()
        .stdout(contains("Tech Talk"))
        .stdout(contains("u-alice"));
}

#[test]
fn test_events_sorted_by_date_ascending_regardless_of_insertion_order() {
    let (home, db) = setup("events_order");

    add_event(&home, &db, "u-alice", "Later", "2099-12-01 10:00", "general");
    add_event(&home, &db, "u-alice", "Middle", "2099-11-01 10:00", "general");
    // Inserted last, dated earliest: must surface first after refetch.
    add_event(&home, &db, "u-alice", "Earliest", "2099-10-01 10:00", "general");

    let out = hub(&home)
        .args(["--db", &db, "--test", "events", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&out).expect("events list --json emits valid JSON");
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Earliest", "Middle", "Later"]);
}

#[test]
fn test_category_filter_returns_exact_subset_in_order() {
    let (home, db) = setup("events_filter");

    add_event(&home, &db, "u-alice", "Chess Night", "2099-10-01 19:00", "clubs");
    add_event(&home, &db, "u-alice", "Exam Briefing", "2099-10-02 09:00", "academics");
    add_event(&home, &db, "u-alice", "Robotics Demo", "2099-10-03 17:00", "clubs");

    let out = hub(&home)
        .args([
            "--db", &db, "--test", "events", "list", "--category", "clubs", "--json",
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
        .map(|e| e["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Chess Night", "Robotics Demo"]);
}

#[test]
fn test_category_filter_all_returns_everything() {
    let (home, db) = setup("events_filter_all");

    add_event(&home, &db, "u-alice", "Chess Night", "2099-10-01 19:00", "clubs");
    add_event(&home, &db, "u-alice", "Exam Briefing", "2099-10-02 09:00", "academics");

    hub(&home)
        .args([
            "--db", &db, "--test", "events", "list", "--category", "all",
        ])
        .assert()
        .success()
        .stdout(contains("Chess Night"))
        .stdout(contains("Exam Briefing"));
}

#[test]
fn test_unknown_category_is_rejected() {
    let (home, db) = setup("events_bad_category");

    hub(&home)
        .args([
            "--db", &db, "--test", "events", "list", "--category", "sports",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));

    hub(&home)
        .args([
            "--db",
            &db,
            "--test",
            "--as",
            "u-alice",
            "events",
            "add",
            "--title",
            "Match",
            "--date",
            "2099-10-01 15:00",
            "--category",
            "sports",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));
}

#[test]
fn test_invalid_date_is_rejected_before_insert() {
    let (home, db) = setup("events_bad_date");

    hub(&home)
        .args([
            "--db",
            &db,
            "--test",
            "--as",
            "u-alice",
            "events",
            "add",
            "--title",
            "Mystery",
            "--date",
            "whenever",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    hub(&home)
        .args(["--db", &db, "--test", "events", "list"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}
