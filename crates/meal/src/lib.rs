pub mod dish;
pub mod filter;
pub mod planner;
pub mod scoring;
pub mod search;

pub use dish::{DietClass, DishCatalog, DishRecord, DishRow, Nutrition};
pub use filter::DishFilter;
pub use planner::{
    DayMealRequest, MealPlanEntry, MealPlanner, MealSettings, MealSlot, PlannedDish,
    plan_day_meals,
};
pub use search::{MealChoice, NO_SUITABLE_DISHES, SearchLimits, choose_meal};
