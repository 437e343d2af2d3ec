use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EGGS: &str = r#"{
  "name": "Soft Boiled Eggs",
  "prep_time": "1 min",
  "cook_time": "7 min",
  "servings": 2,
  "ingredients": [
    { "id": "eggs", "name": "Eggs", "amount": "2" },
    { "id": "water", "name": "Water", "amount": "1 pot" },
    { "id": "salt", "name": "Salt", "amount": "a pinch" }
  ],
  "steps": [
    { "id": "boil", "title": "Boil the water", "description": "Bring the pot to a rolling boil." },
    { "id": "cook", "title": "Cook the eggs", "description": "Lower the eggs in gently.", "duration": 5 },
    { "id": "rest", "title": "Rest", "description": "Move the eggs to cold water.", "duration": 2 }
  ]
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to write the test recipe into the environment
fn write_recipe(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("eggs.json");
    std::fs::write(&path, json).expect("Failed to write recipe");
    path
}

/// Helper function to create a Command with --no-color and an isolated XDG
/// data directory
fn sous_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sous").expect("Failed to find sous binary");
    cmd.env("XDG_DATA_HOME", temp_dir.path().join("data"))
        .arg("--no-color")
        .arg("--no-notify");
    cmd
}

/// Helper function to run a scripted walkthrough of the test recipe
fn cook(temp_dir: &TempDir, extra: &[&str], script: &str) -> assert_cmd::assert::Assert {
    let recipe = write_recipe(temp_dir.path(), EGGS);
    sous_cmd(temp_dir)
        .args(["--recipe", recipe.to_str().unwrap(), "--tick-ms", "1"])
        .args(extra)
        .arg("cook")
        .write_stdin(script)
        .assert()
}

#[test]
fn test_cli_show_default_recipe() {
    let temp_dir = create_cli_test_environment();

    sous_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Classic Margherita Pizza"))
        .stdout(predicate::str::contains("Prep: 20 min • Cook: 15 min • Serves: 4"))
        .stdout(predicate::str::contains("### 1. Prepare the dough (30 minutes)"));
}

#[test]
fn test_cli_show_uses_xdg_recipe() {
    let temp_dir = create_cli_test_environment();
    let data_dir = temp_dir.path().join("data").join("sous");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("recipe.json"), EGGS).unwrap();

    sous_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Soft Boiled Eggs"));
}

#[test]
fn test_cli_show_json() {
    let temp_dir = create_cli_test_environment();
    let recipe = write_recipe(temp_dir.path(), EGGS);

    let output = sous_cmd(&temp_dir)
        .args(["--recipe", recipe.to_str().unwrap(), "show", "--json"])
        .output()
        .expect("Failed to run sous");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show --json should print JSON");
    assert_eq!(json["name"], "Soft Boiled Eggs");
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][1]["duration"], 5);
}

#[test]
fn test_cli_check_valid_recipe() {
    let temp_dir = create_cli_test_environment();
    let recipe = write_recipe(temp_dir.path(), EGGS);

    sous_cmd(&temp_dir)
        .args(["check", recipe.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Recipe 'Soft Boiled Eggs' is valid (3 ingredients, 3 steps)",
        ));
}

#[test]
fn test_cli_check_invalid_recipe() {
    let temp_dir = create_cli_test_environment();
    let recipe = write_recipe(
        temp_dir.path(),
        r#"{ "name": "Nothing", "ingredients": [{ "id": "1", "name": "Air", "amount": "some" }], "steps": [] }"#,
    );

    sous_cmd(&temp_dir)
        .args(["check", recipe.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid recipe file"))
        .stderr(predicate::str::contains("steps"));
}

#[test]
fn test_cli_check_missing_file() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    sous_cmd(&temp_dir)
        .args(["check", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File system error"));
}

#[test]
fn test_cli_cook_starts_on_checklist() {
    let temp_dir = create_cli_test_environment();

    cook(&temp_dir, &[], "quit\n")
        .success()
        .stdout(predicate::str::contains("**[Ingredients (0/3)]** | Cooking Steps (0/3)"))
        .stdout(predicate::str::contains("- [ ] `eggs` **Eggs** 2"))
        .stdout(predicate::str::contains("*Check off all ingredients to start*"));
}

#[test]
fn test_cli_gate_rejects_early_start() {
    let temp_dir = create_cli_test_environment();

    cook(&temp_dir, &[], "check eggs\ncheck water\ncook\n")
        .success()
        .stdout(predicate::str::contains(
            "Error: Please check off all ingredients before starting! (1 remaining)",
        ))
        .stdout(predicate::str::contains("Cooking Steps (0/3)").and(
            predicate::str::contains("## Step 1 of 3").not(),
        ));
}

#[test]
fn test_cli_full_walkthrough() {
    let temp_dir = create_cli_test_environment();
    let script = "\
check eggs
check water
check salt
cook
next
timer start
wait
next
timer
wait
status
new
quit
";

    cook(&temp_dir, &[], script)
        .success()
        .stdout(predicate::str::contains("**Let's Start Cooking!**"))
        .stdout(predicate::str::contains("## Step 2 of 3 (67% Complete)"))
        .stdout(predicate::str::contains("#### Timer Complete!"))
        .stdout(predicate::str::contains("### Cook the eggs (✓ Completed)"))
        .stdout(predicate::str::contains("Success: Cook the eggs finished at"))
        .stdout(predicate::str::contains("## Congratulations!"))
        .stdout(predicate::str::contains(
            "Success: Soft Boiled Eggs: step 3 of 3, 3 completed, timer 00:00 (completed)",
        ))
        .stdout(predicate::str::contains("**[Ingredients (3/3)]**"));
}

#[test]
fn test_cli_new_requires_finished_steps() {
    let temp_dir = create_cli_test_environment();

    cook(
        &temp_dir,
        &[],
        "check eggs\ncheck water\ncheck salt\ncook\nnew\n",
    )
    .success()
    .stdout(predicate::str::contains(
        "Error: Finish the remaining 3 step(s) before starting a new recipe",
    ));
}

#[test]
fn test_cli_goto_bounds() {
    let temp_dir = create_cli_test_environment();

    cook(
        &temp_dir,
        &[],
        "check eggs\ncheck water\ncheck salt\ncook\ngoto 0\ngoto 9\ngoto 3\n",
    )
    .success()
    .stdout(predicate::str::contains("Error: Step numbers start at 1"))
    .stdout(predicate::str::contains(
        "Error: Step 9 is out of range (recipe has 3 steps)",
    ))
    .stdout(predicate::str::contains("## Step 3 of 3"));
}

#[test]
fn test_cli_timer_on_untimed_step() {
    let temp_dir = create_cli_test_environment();

    cook(
        &temp_dir,
        &[],
        "check eggs\ncheck water\ncheck salt\ncook\ntimer\nwait\n",
    )
    .success()
    .stdout(predicate::str::contains(
        "Error: Step 'Boil the water' has no timer",
    ))
    .stdout(predicate::str::contains("Error: No timer is running"));
}

#[test]
fn test_cli_wrong_view_and_unknown_commands() {
    let temp_dir = create_cli_test_environment();

    cook(&temp_dir, &[], "next\ndance\ncheck bacon\n")
        .success()
        .stdout(predicate::str::contains(
            "Error: This command is only available in the cooking view",
        ))
        .stdout(predicate::str::contains("Error: Unknown command 'dance'"))
        .stdout(predicate::str::contains(
            "Error: Ingredient with ID 'bacon' not found",
        ));
}

#[test]
fn test_cli_back_keeps_progress_by_default() {
    let temp_dir = create_cli_test_environment();

    cook(
        &temp_dir,
        &[],
        "check eggs\ncheck water\ncheck salt\ncook\nnext\nback\nstatus\ncook\n",
    )
    .success()
    .stdout(predicate::str::contains(
        "Success: Soft Boiled Eggs: 3 of 3 ingredients checked",
    ))
    .stdout(predicate::str::contains("Please check off all").not());
}

#[test]
fn test_cli_reset_policy_clears_checklist() {
    let temp_dir = create_cli_test_environment();

    cook(
        &temp_dir,
        &["--on-leave", "reset"],
        "check eggs\ncheck water\ncheck salt\ncook\nback\ncook\n",
    )
    .success()
    .stdout(predicate::str::contains(
        "Error: Please check off all ingredients before starting! (3 remaining)",
    ));
}

#[test]
fn test_cli_json_command() {
    let temp_dir = create_cli_test_environment();

    cook(&temp_dir, &[], "check salt\njson\n")
        .success()
        .stdout(predicate::str::contains("\"view\": \"ingredients\""))
        .stdout(predicate::str::contains("\"checked\": 1"));
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = create_cli_test_environment();

    cook(&temp_dir, &[], "help\n")
        .success()
        .stdout(predicate::str::contains("## Commands"))
        .stdout(predicate::str::contains("`goto <n>` jump to step n"));
}

#[test]
fn test_cli_bad_recipe_path_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    sous_cmd(&temp_dir)
        .args(["--recipe", missing.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load recipe"));
}
