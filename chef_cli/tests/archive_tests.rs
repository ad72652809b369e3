//! Catalog source tests for the mychef binary.
//!
//! These tests verify that:
//! - A user supplied archive replaces the bundled one
//! - Malformed archive entries are skipped
//! - An unreadable or corrupt archive degrades to an empty catalog

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "[source]\noffline = true\n",
    )
    .expect("Failed to write config");
    temp_dir
}

fn run_with_archive(dir: &TempDir, archive: &Path, args: &[&str]) -> Value {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("mychef"))
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--offline")
        .arg("--archive")
        .arg(archive)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

fn small_archive() -> Value {
    json!([
        {
            "id": "veg-cucumber",
            "name": "拍黄瓜",
            "description": "凉拌黄瓜",
            "category": "素菜",
            "ingredients": [
                {"name": "黄瓜", "quantity": 2, "unit": "根", "text_quantity": "2 根"},
                {"name": "蒜", "quantity": null, "unit": null, "text_quantity": "适量"}
            ]
        },
        {
            "id": "meat-pork-slices",
            "name": "回锅肉",
            "description": "川味回锅肉",
            "category": "荤菜",
            "ingredients": [
                {"name": "猪肉", "quantity": 300, "unit": "g", "text_quantity": "300 g"}
            ]
        },
        {"id": "broken", "ingredients": "not a list"},
        {"id": "meat-pork-slices", "name": "重复", "category": "荤菜"}
    ])
}

#[test]
fn test_custom_archive_replaces_bundled() {
    let dir = setup_test_dir();
    let archive = dir.path().join("recipes.json");
    fs::write(&archive, small_archive().to_string()).unwrap();

    let recipes = run_with_archive(&dir, &archive, &["recipes"]);
    assert_eq!(
        recipes,
        json!([
            {"name": "拍黄瓜", "description": "凉拌黄瓜"},
            {"name": "回锅肉", "description": "川味回锅肉"}
        ])
    );

    let categories = run_with_archive(&dir, &archive, &["categories"]);
    assert_eq!(categories, json!(["素菜", "荤菜"]));
}

#[test]
fn test_small_archive_shrinks_recommendation() {
    let dir = setup_test_dir();
    let archive = dir.path().join("recipes.json");
    fs::write(&archive, small_archive().to_string()).unwrap();

    let rec = run_with_archive(&dir, &archive, &["--seed", "1", "eat", "--people", "6", "--groceries"]);
    assert_eq!(rec["meatDishCount"], 1);
    assert_eq!(rec["vegetableDishCount"], 1);
    assert_eq!(rec["message"], "为6人推荐的菜品，包含1个荤菜和1个素菜。");

    let ingredients = rec["groceryList"]["ingredients"].as_array().unwrap();
    let garlic = ingredients.iter().find(|i| i["name"] == "蒜").unwrap();
    assert!(garlic["totalQuantity"].is_null());
    assert!(garlic["unit"].is_null());
}

#[test]
fn test_corrupt_archive_gives_empty_catalog() {
    let dir = setup_test_dir();
    let archive = dir.path().join("recipes.json");
    fs::write(&archive, "{ this is not json").unwrap();

    let recipes = run_with_archive(&dir, &archive, &["recipes"]);
    assert_eq!(recipes, json!([]));

    let plan = run_with_archive(&dir, &archive, &["--seed", "1", "plan", "--people", "3"]);
    assert_eq!(plan["weekdays"].as_array().unwrap().len(), 5);
    assert_eq!(plan["weekend"].as_array().unwrap().len(), 2);
    assert!(plan["groceryList"]["ingredients"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn test_missing_archive_gives_empty_catalog() {
    let dir = setup_test_dir();
    let archive = dir.path().join("does-not-exist.json");

    let rec = run_with_archive(&dir, &archive, &["eat", "--people", "3"]);
    assert_eq!(rec["dishes"], json!([]));
    assert_eq!(rec["meatDishCount"], 0);
}
