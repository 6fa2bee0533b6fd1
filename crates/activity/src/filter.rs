use serde::{Deserialize, Serialize};
use vitaplan_shared::KeywordTable;

use crate::catalog::ActivityRecord;

/// Accessibility filter for the activity catalog.
///
/// An activity is kept when its description or category heading contains at
/// least one `allow` keyword and no `deny` keyword. Deny wins when both match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityFilter {
    pub allow: KeywordTable,
    pub deny: KeywordTable,
}

impl Default for AccessibilityFilter {
    fn default() -> Self {
        Self {
            allow: default_allow(),
            deny: default_deny(),
        }
    }
}

impl AccessibilityFilter {
    pub fn is_accessible(&self, record: &ActivityRecord) -> bool {
        let description = record.description.to_lowercase();
        let heading = record.category_heading.to_lowercase();

        if description.trim().is_empty() {
            return false;
        }

        if self.deny.matches(&description) || self.deny.matches(&heading) {
            return false;
        }

        self.allow.matches(&description) || self.allow.matches(&heading)
    }

    pub fn apply<'a>(&self, records: &'a [ActivityRecord]) -> Vec<&'a ActivityRecord> {
        records.iter().filter(|r| self.is_accessible(r)).collect()
    }
}

fn default_allow() -> KeywordTable {
    KeywordTable::new()
        .with(
            "cardio",
            [
                "walk",
                "jog",
                "run",
                "bicycl",
                "cycle",
                "elliptical",
                "stair",
                "step",
                "row",
                "rowing machine",
                "aerobic",
                "cardio",
                "hike",
                "brisk walk",
            ],
        )
        .with(
            "strength",
            [
                "resistance",
                "strength",
                "body weight",
                "bodyweight",
                "calisthenics",
                "circuit",
                "kettlebell",
                "weight training",
            ],
        )
        .with("flexibility", ["yoga", "pilates", "stretch"])
        .with("aquatic", ["swim", "water aerobics"])
        .with("dance", ["dance", "zumba"])
        .with("household", ["household", "cleaning", "mopping", "gardening"])
}

fn default_deny() -> KeywordTable {
    KeywordTable::new()
        .with(
            "winter_sports",
            [
                "ski",
                "snowboard",
                "ice hockey",
                "skating, speed",
                "ice skating",
                "bobsled",
                "luge",
            ],
        )
        .with("board_and_wheel", ["skateboard", "unicycling"])
        .with("equestrian", ["horse", "equestrian", "polo", "rodeo"])
        .with("motor_sports", ["auto racing", "open wheel", "motocross"])
        .with("aerial", ["parachute", "skydiv", "hang glid", "bungee"])
        .with(
            "climbing",
            ["mountain climbing", "rock climbing", "bouldering"],
        )
        .with(
            "extreme_water",
            [
                "whitewater",
                "surfing big wave",
                "scuba",
                "free-diving",
                "water polo, competitive",
            ],
        )
        .with(
            "combat",
            [
                "boxing, competition",
                "mma",
                "sparring",
                "wrestling, competition",
            ],
        )
        .with("assistive_device", ["wheelchair", "baby carrier"])
}
