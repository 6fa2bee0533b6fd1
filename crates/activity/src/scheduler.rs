use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::VariantArray;
use vitaplan_shared::Goal;

use crate::catalog::ActivityRecord;
use crate::filter::AccessibilityFilter;
use crate::plan::{DayPlanEntry, Recommendation, Weekday, rest_week};
use crate::scoring::{ScoredActivity, rank};

pub const ALLOWED_DURATIONS: [u16; 4] = [30, 45, 60, 90];
pub const POOL_CAP: usize = 200;
pub const RECENT_WINDOW: usize = 3;
pub const MIN_DRAW_WEIGHT: f64 = 0.1;
pub const JITTER_LOW: f64 = 0.85;
pub const JITTER_SPAN: f64 = 0.30;

/// Weekly volume derived from the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyTarget {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub resistance_days: u8,
}

impl WeeklyTarget {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::WeightLoss => Self {
                min_minutes: 300,
                max_minutes: 450,
                resistance_days: 1,
            },
            Goal::MuscleGain => Self {
                min_minutes: 90,
                max_minutes: 150,
                resistance_days: 3,
            },
            Goal::Maintenance => Self {
                min_minutes: 150,
                max_minutes: 300,
                resistance_days: 1,
            },
        }
    }

    pub fn midpoint(&self) -> u32 {
        (self.min_minutes + self.max_minutes) / 2
    }

    /// 6 when the goal needs 3+ resistance days or 300+ minutes, else 5.
    pub fn active_days(&self) -> usize {
        if self.resistance_days >= 3 || self.midpoint() >= 300 {
            6
        } else {
            5
        }
    }

    pub fn rest_days(&self) -> usize {
        Weekday::VARIANTS.len() - self.active_days()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSettings {
    pub pool_cap: usize,
    pub accessibility: AccessibilityFilter,
}

impl Default for WeekSettings {
    fn default() -> Self {
        Self {
            pool_cap: POOL_CAP,
            accessibility: AccessibilityFilter::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeekRequest {
    pub goal: Goal,
    pub favorites: Vec<String>,
    /// Fixed seed for a reproducible plan. `None` draws a fresh one.
    pub seed: Option<u64>,
}

/// Builds 7-day activity plans.
#[derive(Debug, Clone, Default)]
pub struct WeekPlanner {
    settings: WeekSettings,
}

impl WeekPlanner {
    pub fn new(settings: WeekSettings) -> Self {
        Self { settings }
    }

    #[tracing::instrument(skip_all, fields(goal = %request.goal, catalog = activities.len()))]
    pub fn plan(&self, activities: &[ActivityRecord], request: &WeekRequest) -> Vec<DayPlanEntry> {
        let seed = request.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let target = WeeklyTarget::for_goal(request.goal);
        let active_days = target.active_days();

        let accessible = self.settings.accessibility.apply(activities);
        let pool = rank(
            &accessible,
            request.goal,
            &request.favorites,
            self.settings.pool_cap,
        );

        tracing::debug!(
            seed,
            accessible = accessible.len(),
            pool = pool.len(),
            active_days,
            "activity pool ranked"
        );

        if pool.is_empty() {
            tracing::warn!("no accessible activity left, returning a rest week");
            return rest_week();
        }

        let per_day = f64::from(target.midpoint()) / active_days.max(1) as f64;
        let daily_minutes: Vec<u16> = (0..active_days)
            .map(|_| {
                let jitter = JITTER_LOW + JITTER_SPAN * rng.random::<f64>();
                snap_duration((per_day * jitter) as i64)
            })
            .collect();

        let mut recent: Vec<String> = Vec::with_capacity(active_days);
        let mut plan = Vec::with_capacity(Weekday::VARIANTS.len());

        for (index, day) in Weekday::VARIANTS.iter().enumerate() {
            if index >= active_days {
                plan.push(DayPlanEntry::rest(*day));
                continue;
            }

            let window = &recent[recent.len().saturating_sub(RECENT_WINDOW)..];
            let mut candidates: Vec<&ScoredActivity> = pool
                .iter()
                .filter(|a| !window.contains(&a.name.to_lowercase()))
                .collect();

            if candidates.is_empty() {
                candidates = pool.iter().collect();
            }

            let picked = weighted_pick(&candidates, &mut rng);
            recent.push(picked.name.to_lowercase());
            plan.push(DayPlanEntry::activity(
                *day,
                picked.name.clone(),
                daily_minutes[index],
            ));
        }

        if target.rest_days() >= 1 {
            ensure_midweek_rest(&mut plan);
        }

        plan
    }
}

/// Plans a week of activities for `goal`.
///
/// Unrecognised goals plan as maintenance. The same `seed` with the same
/// inputs always yields the same plan; without a seed every call draws fresh
/// entropy and results may differ.
pub fn plan_week(
    activities: &[ActivityRecord],
    goal: &str,
    favorites: Option<&[String]>,
    seed: Option<u64>,
) -> Vec<DayPlanEntry> {
    let goal = goal.trim().parse().unwrap_or_else(|_| {
        tracing::debug!(goal, "unrecognised goal, planning for maintenance");
        Goal::default()
    });

    let request = WeekRequest {
        goal,
        favorites: favorites.map(<[String]>::to_vec).unwrap_or_default(),
        seed,
    };

    WeekPlanner::default().plan(activities, &request)
}

/// Clamps to 30..=90 and snaps to the nearest allowed duration; ties go to
/// the shorter one.
pub fn snap_duration(minutes: i64) -> u16 {
    let clamped = minutes.clamp(30, 90);

    ALLOWED_DURATIONS
        .into_iter()
        .min_by_key(|d| (i64::from(*d) - clamped).abs())
        .unwrap_or(ALLOWED_DURATIONS[0])
}

/// Weighted draw over `candidates` (weight `max(0.1, priority)`).
///
/// Falls back to the last candidate when rounding leaves the draw above the
/// cumulative total. `candidates` must not be empty.
fn weighted_pick<'a>(candidates: &[&'a ScoredActivity], rng: &mut impl Rng) -> &'a ScoredActivity {
    let weight = |a: &ScoredActivity| a.priority.max(MIN_DRAW_WEIGHT);
    let total: f64 = candidates.iter().map(|a| weight(a)).sum();
    let draw = rng.random::<f64>() * total;

    let mut acc = 0.0;
    for &candidate in candidates {
        acc += weight(candidate);
        if acc >= draw {
            return candidate;
        }
    }

    candidates[candidates.len() - 1]
}

/// Moves the latest rest day onto Thursday when neither Wednesday nor
/// Thursday rests. Weekday labels stay in place; only the assignments move.
fn ensure_midweek_rest(plan: &mut [DayPlanEntry]) {
    let wednesday = Weekday::Wednesday.index();
    let thursday = Weekday::Thursday.index();

    if plan.len() <= thursday || plan[wednesday].is_rest() || plan[thursday].is_rest() {
        return;
    }

    let Some(rest_index) = plan.iter().rposition(DayPlanEntry::is_rest) else {
        return;
    };

    let moved = std::mem::replace(&mut plan[thursday].recommendation, Recommendation::Rest);
    let minutes = std::mem::replace(&mut plan[thursday].duration_minutes, 0);
    plan[rest_index].recommendation = moved;
    plan[rest_index].duration_minutes = minutes;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, priority: f64) -> ScoredActivity {
        ScoredActivity {
            name: name.to_owned(),
            met: 4.0,
            priority,
        }
    }

    #[test]
    fn test_weekly_targets() {
        let loss = WeeklyTarget::for_goal(Goal::WeightLoss);
        assert_eq!(loss.midpoint(), 375);
        assert_eq!(loss.active_days(), 6);

        let gain = WeeklyTarget::for_goal(Goal::MuscleGain);
        assert_eq!(gain.midpoint(), 120);
        assert_eq!(gain.active_days(), 6);

        let maintain = WeeklyTarget::for_goal(Goal::Maintenance);
        assert_eq!(maintain.midpoint(), 225);
        assert_eq!(maintain.active_days(), 5);
        assert_eq!(maintain.rest_days(), 2);
    }

    #[test]
    fn test_snap_duration() {
        assert_eq!(snap_duration(0), 30);
        assert_eq!(snap_duration(37), 30);
        assert_eq!(snap_duration(38), 45);
        assert_eq!(snap_duration(52), 45);
        assert_eq!(snap_duration(53), 60);
        assert_eq!(snap_duration(75), 60);
        assert_eq!(snap_duration(76), 90);
        assert_eq!(snap_duration(500), 90);
    }

    #[test]
    fn test_weighted_pick_single_candidate() {
        let only = scored("Walking", 5.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(weighted_pick(&[&only], &mut rng).name, "Walking");
        }
    }

    #[test]
    fn test_weighted_pick_favors_heavier_weight() {
        let heavy = scored("Heavy", 100.0);
        let light = scored("Light", -5.0);
        let mut rng = StdRng::seed_from_u64(42);

        let heavy_count = (0..1000)
            .filter(|_| weighted_pick(&[&light, &heavy], &mut rng).name == "Heavy")
            .count();

        // light weight is clamped to 0.1, about 0.1% of draws
        assert!(heavy_count > 980, "heavy picked {heavy_count} times");
    }

    #[test]
    fn test_midweek_rest_moves_assignment_only() {
        let mut plan: Vec<DayPlanEntry> = Weekday::VARIANTS
            .iter()
            .map(|d| DayPlanEntry::activity(*d, format!("{d} run"), 45))
            .collect();
        plan[6] = DayPlanEntry::rest(Weekday::Sunday);

        ensure_midweek_rest(&mut plan);

        assert!(plan[3].is_rest());
        assert_eq!(plan[3].day, Weekday::Thursday);
        assert_eq!(plan[3].duration_minutes, 0);
        assert_eq!(plan[6].day, Weekday::Sunday);
        assert_eq!(plan[6].recommendation.as_str(), "Thursday run");
        assert_eq!(plan[6].duration_minutes, 45);
    }

    #[test]
    fn test_midweek_rest_noop_when_wednesday_rests() {
        let mut plan: Vec<DayPlanEntry> = Weekday::VARIANTS
            .iter()
            .map(|d| DayPlanEntry::activity(*d, "Walking", 30))
            .collect();
        plan[2] = DayPlanEntry::rest(Weekday::Wednesday);
        let before = plan.clone();

        ensure_midweek_rest(&mut plan);

        assert_eq!(plan, before);
    }

    #[test]
    fn test_midweek_rest_noop_without_rest() {
        let mut plan: Vec<DayPlanEntry> = Weekday::VARIANTS
            .iter()
            .map(|d| DayPlanEntry::activity(*d, "Walking", 30))
            .collect();
        let before = plan.clone();

        ensure_midweek_rest(&mut plan);

        assert_eq!(plan, before);
    }
}
