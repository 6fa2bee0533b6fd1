use std::path::PathBuf;

use clap::Args;
use vitaplan::Config;
use vitaplan_meal::{DayMealRequest, MealPlanEntry, MealPlanner};
use vitaplan_shared::{DietPreference, Goal};

use super::OutputFormat;

#[derive(Args)]
pub struct MealsArgs {
    /// JSON file holding an array of dish rows
    #[arg(long)]
    catalog: PathBuf,

    /// Daily calorie target
    #[arg(long)]
    target_kcal: f64,

    /// Fitness goal: weight loss, muscle gain or maintenance
    #[arg(long, default_value = "maintenance")]
    goal: String,

    /// Diet preference: vegan, vegetarian, non-veg or any
    #[arg(long, default_value = "any")]
    diet: String,

    /// Leave out dishes with egg (vegetarian only)
    #[arg(long)]
    no_eggs: bool,

    /// Allergy term matched against dish allergens, may be repeated
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Seed for a reproducible plan
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn run(config: Config, args: MealsArgs) -> anyhow::Result<()> {
    let catalog = vitaplan::catalog::load_dishes(&args.catalog)?;

    let request = DayMealRequest {
        target_kcal: args.target_kcal,
        goal: Goal::parse_exact(&args.goal),
        diet: DietPreference::parse(&args.diet),
        include_eggs: !args.no_eggs,
        allergies: args.allergies,
        seed: args.seed,
    };

    let plan: Vec<MealPlanEntry> = MealPlanner::new(config.meal)
        .plan_day(&catalog, &request)?
        .into_iter()
        .map(|entry| MealPlanEntry {
            totals: entry.totals.rounded(),
            ..entry
        })
        .collect();

    let unfilled = plan.iter().filter(|e| e.is_unfilled()).count();
    if unfilled > 0 {
        tracing::warn!(unfilled, "some meal slots have no suitable dishes");
    }

    super::print(&plan, args.format)
}
