#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn khana_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("khana"));
    cmd.env("KHANA_DATA_DIR", data_dir.as_os_str());
    cmd
}

/// Pull the short id out of an `add` command's stdout ("id: a1b2c3d4").
fn extract_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| line.trim().strip_prefix("id: "))
        .expect("add output should contain an id line")
        .trim()
        .to_string()
}

#[test]
fn test_first_run_seeds_defaults() {
    let temp = TempDir::new().unwrap();

    khana_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paneer Butter Masala"))
        .stdout(predicate::str::contains("Masala Chai"))
        .stdout(predicate::str::contains("Poha"));

    assert!(temp.path().join("recipes.json").exists());
}

#[test]
fn test_add_list_show_edit_rm_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Add a recipe
    let output = khana_cmd(temp.path())
        .args([
            "add",
            "--title",
            "Dal Tadka",
            "--description",
            "Yellow lentils tempered with cumin and garlic.",
            "--ingredient",
            "1 cup toor dal",
            "--ingredient",
            "1 tsp cumin seeds",
            "--step",
            "Pressure cook the dal.",
            "--step",
            "Temper cumin and garlic in ghee, pour over.",
            "--prep",
            "15",
            "--cook",
            "30",
            "--difficulty",
            "easy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added: Dal Tadka"))
        .get_output()
        .clone();
    let id = extract_id(&output.stdout);

    // 2. It shows up in a filtered listing
    khana_cmd(temp.path())
        .args(["list", "--search", "dal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dal Tadka"));

    // 3. Full view: 15 + 30 minutes
    khana_cmd(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dal Tadka"))
        .stdout(predicate::str::contains("Ingredients"))
        .stdout(predicate::str::contains("45 min"));

    // 4. Edit just the cook time; everything else keeps its stored value
    khana_cmd(temp.path())
        .args(["edit", &id, "--cook", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe updated: Dal Tadka"));

    khana_cmd(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 h"));

    // 5. Remove it
    khana_cmd(temp.path())
        .args(["rm", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe removed: Dal Tadka"));

    khana_cmd(temp.path())
        .args(["list", "--search", "dal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_validation_reports_every_violated_field() {
    let temp = TempDir::new().unwrap();

    khana_cmd(temp.path())
        .args(["add", "--title", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"))
        .stderr(predicate::str::contains("description"))
        .stderr(predicate::str::contains("ingredient"))
        .stderr(predicate::str::contains("step"))
        .stderr(predicate::str::contains("prep time"))
        .stderr(predicate::str::contains("cook time"))
        .stderr(predicate::str::contains("difficulty"));

    // Nothing was written beyond the seed
    khana_cmd(temp.path())
        .args(["list", "--search", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_corrupted_store_is_reseeded() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("recipes.json"), "not json").unwrap();

    khana_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Masala Chai"));

    // The reseed was persisted as a well-formed collection
    let raw = fs::read_to_string(temp.path().join("recipes.json")).unwrap();
    assert!(raw.trim_start().starts_with('['));
}

#[test]
fn test_filters_compose() {
    let temp = TempDir::new().unwrap();

    // Seeded: Masala Chai (easy, 13 min), Poha (easy, 20 min),
    // Paneer Butter Masala (medium, 40 min)
    khana_cmd(temp.path())
        .args(["list", "--difficulty", "easy", "--max-time", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Masala Chai"))
        .stdout(predicate::str::contains("Poha").not())
        .stdout(predicate::str::contains("Paneer Butter Masala").not());
}

#[test]
fn test_theme_round_trip() {
    let temp = TempDir::new().unwrap();

    khana_cmd(temp.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    khana_cmd(temp.path())
        .args(["theme", "dark"])
        .assert()
        .success();

    khana_cmd(temp.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn test_unknown_id_is_reported() {
    let temp = TempDir::new().unwrap();

    khana_cmd(temp.path())
        .args(["show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recipe matches id 'deadbeef'"));
}
