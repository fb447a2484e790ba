use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LISTINGS: &str = r#"[
    {"id": 1, "name": "Riverbend Supports", "location": "Albury", "category": ["Personal Care"]},
    {"id": 2, "name": "Premier Therapy", "location": "Wodonga", "category": ["Therapy"], "isPremium": true},
    {"id": 3, "name": "Coastal Care", "location": "Albury", "category": ["Respite"]}
]"#;

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("services.json"), LISTINGS).unwrap();
    temp
}

fn cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ndis-directory").unwrap();
    cmd.arg("--config")
        .arg(root.join("config.toml"))
        .arg("--data-dir")
        .arg(root.join("data"))
        .arg("--no-color")
        .env_remove("NDIS_DATA_DIR");
    cmd
}

fn add_review(root: &Path, id: &str, rating: &str) -> assert_cmd::assert::Assert {
    cmd(root)
        .args(["review", "add", id, "--rating", rating])
        .args(["--comment", "Helpful team", "--author", "Sam"])
        .assert()
}

fn search_ids(root: &Path, query: &str) -> Vec<String> {
    let output = cmd(root)
        .args(["search", query, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    results
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].to_string())
        .collect()
}

#[test]
fn test_help() {
    Command::cargo_bin("ndis-directory")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("review"));
}

#[test]
fn test_init_creates_files() {
    let temp = TempDir::new().unwrap();
    cmd(temp.path()).arg("init").assert().success();

    assert!(temp.path().join("config.toml").exists());
    assert!(temp.path().join("data/services.json").exists());
    assert!(temp.path().join("data/reviews.json").exists());
}

#[test]
fn test_add_and_list_reviews() {
    let temp = setup();
    add_review(temp.path(), "1", "5")
        .success()
        .stdout(predicate::str::contains("Review submitted"));

    let output = cmd(temp.path())
        .args(["review", "list", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reviews: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["author"], "Sam");
    assert_eq!(reviews[0]["providerName"], "Riverbend Supports");
    assert_eq!(reviews[0]["targetId"], 1);
}

#[test]
fn test_invalid_rating_rejected() {
    let temp = setup();
    for rating in ["0", "6", "-1", "3.5"] {
        add_review(temp.path(), "1", rating)
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }

    cmd(temp.path())
        .args(["review", "list", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_empty_comment_rejected() {
    let temp = setup();
    cmd(temp.path())
        .args(["review", "add", "1", "--rating", "4"])
        .args(["--comment", "   ", "--author", "Sam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Comment cannot be empty"));
}

#[test]
fn test_unknown_listing() {
    let temp = setup();
    add_review(temp.path(), "42", "4")
        .failure()
        .stderr(predicate::str::contains("Service not found: 42"));

    cmd(temp.path())
        .args(["review", "add", "42", "--rating", "4", "--unlisted"])
        .args(["--comment", "Ahead of listing", "--author", "Sam"])
        .assert()
        .success();

    cmd(temp.path())
        .args(["review", "list", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ahead of listing"));
}

#[test]
fn test_list_without_reviews() {
    let temp = setup();
    cmd(temp.path())
        .args(["review", "list", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews yet"));
}

#[test]
fn test_search_ranking() {
    let temp = setup();
    assert_eq!(search_ids(temp.path(), ""), vec!["2", "1", "3"]);

    add_review(temp.path(), "3", "5").success();
    add_review(temp.path(), "1", "4").success();
    assert_eq!(search_ids(temp.path(), ""), vec!["2", "3", "1"]);
    assert_eq!(search_ids(temp.path(), "albury"), vec!["3", "1"]);
    assert_eq!(search_ids(temp.path(), "therapy"), vec!["2"]);
}

#[test]
fn test_search_limit() {
    let temp = setup();
    let output = cmd(temp.path())
        .args(["search", "--limit", "1", "--json"])
        .output()
        .unwrap();
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
}

#[test]
fn test_show() {
    let temp = setup();
    add_review(temp.path(), "2", "5").success();
    add_review(temp.path(), "2", "4").success();
    add_review(temp.path(), "2", "5").success();

    let output = cmd(temp.path())
        .args(["show", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let detail: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(detail["id"], 2);
    assert_eq!(detail["name"], "Premier Therapy");
    assert_eq!(detail["averageRating"], 4.7);
    assert_eq!(detail["reviewCount"], 3);
    assert_eq!(detail["isFeatured"], true);
    assert_eq!(detail["reviews"].as_array().unwrap().len(), 3);
}

#[test]
fn test_show_unknown() {
    let temp = setup();
    cmd(temp.path())
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service not found"));
}

#[test]
fn test_config_show() {
    let temp = setup();
    cmd(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[review]"));
}
