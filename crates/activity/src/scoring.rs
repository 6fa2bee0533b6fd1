use std::collections::HashMap;

use serde::Serialize;
use vitaplan_shared::Goal;

use crate::catalog::ActivityRecord;

pub const MET_SCORE_CEILING: f64 = 10.0;
pub const EXTREME_MET: f64 = 12.0;
pub const EXTREME_MET_PENALTY: f64 = 2.0;
pub const FAVORITE_BOOST: f64 = 2.0;

const STRENGTH_TERMS: [&str; 7] = [
    "weight",
    "resistance",
    "circuit",
    "calisthenics",
    "body weight",
    "bodyweight",
    "strength",
];

/// Activity ranked for one planning call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredActivity {
    pub name: String,
    pub met: f64,
    pub priority: f64,
}

/// Relevance of an activity for a goal. Higher is better.
pub fn priority_score(name: &str, met: f64, goal: Goal) -> f64 {
    let name = name.to_lowercase();
    let has = |term: &str| name.contains(term);

    let mut score = met.min(MET_SCORE_CEILING);
    if met > EXTREME_MET {
        score -= EXTREME_MET_PENALTY;
    }

    match goal {
        Goal::WeightLoss => {
            if (3.5..=10.0).contains(&met) {
                score += 2.0;
            }
            if has("walk") {
                score += 2.0;
            }
            if ["cycle", "bicycl", "swim"].into_iter().any(has) {
                score += 1.2;
            }
        }
        Goal::MuscleGain => {
            if STRENGTH_TERMS.into_iter().any(has) {
                score += 3.0;
            }
            if has("yoga") || has("pilates") {
                score += 1.0;
            }
            if has("run") && met > 10.0 {
                score -= 1.0;
            }
        }
        Goal::Maintenance => {
            if (3.0..=6.0).contains(&met) {
                score += 2.0;
            }
            if has("walk") {
                score += 2.0;
            }
            if ["cycle", "swim", "yoga"].into_iter().any(has) {
                score += 1.0;
            }
        }
    }

    score
}

/// Adds [`FAVORITE_BOOST`] for every favorite term found in `name`.
pub fn boost_favorites(score: f64, name: &str, favorites: &[String]) -> f64 {
    let name = name.to_lowercase();

    favorites
        .iter()
        .map(|f| f.trim().to_lowercase())
        .filter(|term| !term.is_empty() && name.contains(term.as_str()))
        .fold(score, |acc, _| acc + FAVORITE_BOOST)
}

/// Deduplicates by description (keeping the highest MET), scores, sorts by
/// descending priority and keeps the first `cap` entries.
///
/// Ties keep catalog order.
pub fn rank(
    records: &[&ActivityRecord],
    goal: Goal,
    favorites: &[String],
    cap: usize,
) -> Vec<ScoredActivity> {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    let mut unique: Vec<(&str, f64)> = Vec::new();

    for record in records {
        let name = record.description.trim();
        if name.is_empty() || record.met_value <= 0.0 {
            continue;
        }

        match by_name.get(name) {
            Some(&index) => {
                if record.met_value > unique[index].1 {
                    unique[index].1 = record.met_value;
                }
            }
            None => {
                by_name.insert(name, unique.len());
                unique.push((name, record.met_value));
            }
        }
    }

    let mut pool: Vec<ScoredActivity> = unique
        .into_iter()
        .map(|(name, met)| {
            let priority = boost_favorites(priority_score(name, met, goal), name, favorites);
            ScoredActivity {
                name: name.to_owned(),
                met,
                priority,
            }
        })
        .collect();

    pool.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    pool.truncate(cap);

    pool
}
