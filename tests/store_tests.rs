use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use scoreboard::store::{JsonFileStore, MemoryStore, Team, TeamStore};

fn scratch_file(test_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "scoreboard-{}-{}.json",
        test_name,
        std::process::id()
    ))
}

fn sample_teams() -> Vec<Team> {
    let mut reds = Team::new("1000", "Reds", "#ef4444");
    reds.adjust_points(3);
    let mut blues = Team::new("1001", "Blues", "#f97316");
    blues.adjust_points(5);
    vec![reds, blues]
}

#[test]
fn json_file_store_round_trips_the_collection() {
    let path = scratch_file("round-trip");
    let store = JsonFileStore::new(&path);
    let teams = sample_teams();

    store.save(&teams).expect("save should succeed");
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded, teams);
}

#[test]
fn save_overwrites_the_previous_snapshot() {
    let path = scratch_file("overwrite");
    let store = JsonFileStore::new(&path);

    store.save(&sample_teams()).unwrap();
    store.save(&[Team::new("2000", "Greens", "#22c55e")]).unwrap();
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Greens");
}

#[test]
fn loading_an_absent_slot_yields_the_empty_collection() {
    let path = scratch_file("absent");
    fs::remove_file(&path).ok();

    let store = JsonFileStore::new(path);
    assert_eq!(store.load(), Vec::new());
}

#[test]
fn loading_a_corrupt_slot_yields_the_empty_collection() {
    let path = scratch_file("corrupt");
    fs::write(&path, "definitely { not json").unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded, Vec::new());
}

#[test]
fn memory_store_honors_the_same_contract() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), Vec::new());

    let teams = sample_teams();
    store.save(&teams).unwrap();
    assert_eq!(store.load(), teams);

    let seeded = MemoryStore::with_teams(sample_teams());
    assert_eq!(seeded.load(), sample_teams());

    // Usable behind the trait, as the admin session consumes it.
    let as_store: &dyn TeamStore = &store;
    assert_eq!(as_store.load().len(), 2);
}

#[test]
fn stored_layout_matches_the_published_shape() {
    let path = scratch_file("layout");
    let store = JsonFileStore::new(&path);
    store.save(&sample_teams()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let first = &value.as_array().expect("an array of teams")[0];
    assert_eq!(first["id"], "1000");
    assert_eq!(first["name"], "Reds");
    assert_eq!(first["points"], 3);
    assert_eq!(first["color"], "#ef4444");
}
