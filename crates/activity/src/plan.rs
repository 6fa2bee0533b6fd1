use serde::{Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const REST: &str = "Rest";

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Zero-based position, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// What a day of the week holds: a named activity or rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recommendation {
    Rest,
    Activity(String),
}

impl Recommendation {
    pub fn as_str(&self) -> &str {
        match self {
            Recommendation::Rest => REST,
            Recommendation::Activity(name) => name,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Recommendation::Rest)
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayPlanEntry {
    pub day: Weekday,
    pub recommendation: Recommendation,
    pub duration_minutes: u16,
}

impl DayPlanEntry {
    pub fn rest(day: Weekday) -> Self {
        Self {
            day,
            recommendation: Recommendation::Rest,
            duration_minutes: 0,
        }
    }

    pub fn activity(day: Weekday, name: impl Into<String>, duration_minutes: u16) -> Self {
        Self {
            day,
            recommendation: Recommendation::Activity(name.into()),
            duration_minutes,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.recommendation.is_rest()
    }
}

/// A full week with every day resting.
pub fn rest_week() -> Vec<DayPlanEntry> {
    Weekday::VARIANTS
        .iter()
        .map(|day| DayPlanEntry::rest(*day))
        .collect()
}
