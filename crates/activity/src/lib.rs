pub mod catalog;
pub mod filter;
pub mod plan;
pub mod scheduler;
pub mod scoring;

pub use catalog::{ActivityCatalog, ActivityRecord, ActivityRow};
pub use filter::AccessibilityFilter;
pub use plan::{DayPlanEntry, REST, Recommendation, Weekday, rest_week};
pub use scheduler::{
    ALLOWED_DURATIONS, WeekPlanner, WeekRequest, WeekSettings, WeeklyTarget, plan_week,
    snap_duration,
};
pub use scoring::{ScoredActivity, priority_score, rank};
