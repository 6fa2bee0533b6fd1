use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;
use vitaplan_shared::row::{optional_text, required_number};

use crate::plan::REST;

/// Activity row as handed over by the catalog store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityRow {
    #[serde(default, alias = "description")]
    pub activity_description: Option<Value>,
    #[serde(default, alias = "category_heading", alias = "heading")]
    pub major_heading: Option<Value>,
    #[serde(default, alias = "met")]
    pub met_value: Option<Value>,
}

/// Physical activity with its MET value.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ActivityRecord {
    #[validate(length(min = 1))]
    pub description: String,
    pub category_heading: String,
    #[validate(range(exclusive_min = 0.0))]
    pub met_value: f64,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        category_heading: impl Into<String>,
        met_value: f64,
    ) -> vitaplan_shared::Result<Self> {
        let record = Self {
            description: description.into().trim().to_owned(),
            category_heading: category_heading.into().trim().to_owned(),
            met_value,
        };

        if !record.met_value.is_finite() {
            vitaplan_shared::bail!(
                InvalidRecord,
                "met_value of {:?} is not finite",
                record.description
            );
        }

        // "Rest" marks rest days in a plan
        if record.description.eq_ignore_ascii_case(REST) {
            vitaplan_shared::bail!(
                InvalidRecord,
                "activity description {:?} is reserved",
                record.description
            );
        }

        record.validate()?;

        Ok(record)
    }
}

impl TryFrom<ActivityRow> for ActivityRecord {
    type Error = vitaplan_shared::Error;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let description = optional_text(row.activity_description.as_ref()).unwrap_or_default();
        let heading = optional_text(row.major_heading.as_ref()).unwrap_or_default();
        let met = required_number(row.met_value.as_ref(), "met_value")?;

        Self::new(description, heading, met)
    }
}

/// Typed activity catalog built from raw rows. Rows that fail boundary
/// parsing are skipped and counted.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    records: Vec<ActivityRecord>,
    skipped: usize,
}

impl ActivityCatalog {
    pub fn from_rows(rows: impl IntoIterator<Item = ActivityRow>) -> Self {
        let mut catalog = Self::default();

        for (index, row) in rows.into_iter().enumerate() {
            match ActivityRecord::try_from(row) {
                Ok(record) => catalog.records.push(record),
                Err(err) => {
                    tracing::warn!(row = index, error = %err, "skipping activity row");
                    catalog.skipped += 1;
                }
            }
        }

        catalog
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ActivityRecord>> for ActivityCatalog {
    fn from(records: Vec<ActivityRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }
}
