//! Tests for CLI commands (week, meals, check-config)

use std::process::Command;

use serde_json::Value;
use temp_dir::TempDir;

fn vitaplan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vitaplan"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_cli_help_shows_all_commands() -> anyhow::Result<()> {
    let output = vitaplan().arg("--help").output()?;

    let help_text = String::from_utf8_lossy(&output.stdout);

    assert!(help_text.contains("week"), "week command not in help");
    assert!(help_text.contains("meals"), "meals command not in help");
    assert!(help_text.contains("check-config"), "check-config command not in help");

    Ok(())
}

#[test]
fn test_week_command_prints_seven_days() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.child("activities.json");
    std::fs::write(
        &catalog,
        r#"[
            {"activity_description": "Walking, brisk pace", "major_heading": "Walking", "met_value": 3.8},
            {"activity_description": "Swimming laps, freestyle", "major_heading": "Water activities", "met_value": 8.3}
        ]"#,
    )?;

    let output = vitaplan()
        .arg("week")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--goal", "weight loss", "--seed", "11", "--format", "json"])
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let plan: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(plan.len(), 7);
    assert_eq!(plan[0]["day"], "Monday");
    assert_eq!(plan[6]["day"], "Sunday");
    assert_eq!(plan.iter().filter(|d| d["recommendation"] == "Rest").count(), 1);

    Ok(())
}

#[test]
fn test_meals_command_prints_three_slots() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.child("dishes.json");
    std::fs::write(
        &catalog,
        r#"[
            {"dish_name": "Chicken curry", "veg_class": "non-veg", "calories_kcal": 420, "protein_g": 32, "fat_g": 18, "carbohydrate_g": 12},
            {"dish_name": "Chana masala", "veg_class": "vegan", "calories_kcal": 320, "protein_g": 16, "fat_g": 8, "carbohydrate_g": 45},
            {"dish_name": "Paneer tikka", "veg_class": "vegetarian", "calories_kcal": 360, "protein_g": 22, "fat_g": 24, "carbohydrate_g": 8}
        ]"#,
    )?;

    let output = vitaplan()
        .arg("meals")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--target-kcal", "2000", "--seed", "5", "--format", "json"])
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let plan: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    let slots: Vec<&str> = plan.iter().filter_map(|e| e["slot"].as_str()).collect();
    assert_eq!(slots, ["Breakfast", "Lunch", "Dinner"]);
    assert_eq!(plan[1]["target_kcal"], 800.0);

    Ok(())
}

#[test]
fn test_meals_command_rejects_zero_target() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.child("dishes.json");
    std::fs::write(
        &catalog,
        r#"[{"dish_name": "Chana masala", "calories_kcal": 320, "protein_g": 16, "fat_g": 8, "carbohydrate_g": 45}]"#,
    )?;

    let output = vitaplan()
        .arg("meals")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--target-kcal", "0"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_check_config_prints_effective_settings() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("vitaplan.toml");
    std::fs::write(&path, "[activity]\npool_cap = 12\n")?;

    let output = vitaplan()
        .arg("--config")
        .arg(&path)
        .arg("check-config")
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let config: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(config["activity"]["pool_cap"], 12);

    Ok(())
}
