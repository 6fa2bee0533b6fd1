use std::path::PathBuf;

use clap::Args;
use vitaplan::Config;
use vitaplan_activity::{WeekPlanner, WeekRequest};
use vitaplan_shared::Goal;

use super::OutputFormat;

#[derive(Args)]
pub struct WeekArgs {
    /// JSON file holding an array of activity rows
    #[arg(long)]
    catalog: PathBuf,

    /// Fitness goal: weight loss, muscle gain or maintenance
    #[arg(long, default_value = "maintenance")]
    goal: String,

    /// Favorite activity term, may be repeated
    #[arg(long = "favorite")]
    favorites: Vec<String>,

    /// Seed for a reproducible plan
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn run(config: Config, args: WeekArgs) -> anyhow::Result<()> {
    let catalog = vitaplan::catalog::load_activities(&args.catalog)?;

    let goal = Goal::parse(&args.goal);
    tracing::debug!(requested = %args.goal, %goal, "goal resolved");

    let request = WeekRequest {
        goal,
        favorites: args.favorites,
        seed: args.seed,
    };
    let plan = WeekPlanner::new(config.activity).plan(catalog.records(), &request);

    let active = plan.iter().filter(|e| !e.is_rest()).count();
    tracing::info!(active_days = active, "week planned");

    super::print(&plan, args.format)
}
