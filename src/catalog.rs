use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use vitaplan_activity::{ActivityCatalog, ActivityRow};
use vitaplan_meal::{DishCatalog, DishRow};

/// Reads a JSON array of activity rows.
pub fn load_activities(path: &Path) -> Result<ActivityCatalog> {
    let rows: Vec<ActivityRow> = read_rows(path)?;
    let catalog = ActivityCatalog::from_rows(rows);

    tracing::info!(
        path = %path.display(),
        records = catalog.records().len(),
        skipped = catalog.skipped(),
        "activity catalog loaded"
    );

    Ok(catalog)
}

/// Reads a JSON array of dish rows.
pub fn load_dishes(path: &Path) -> Result<DishCatalog> {
    let rows: Vec<DishRow> = read_rows(path)?;
    let catalog = DishCatalog::from_rows(rows);

    tracing::info!(
        path = %path.display(),
        dishes = catalog.len(),
        skipped = catalog.skipped(),
        duplicates = catalog.duplicates(),
        "dish catalog loaded"
    );

    Ok(catalog)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog {}", path.display()))
}
