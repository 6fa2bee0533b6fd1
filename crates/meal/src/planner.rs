use std::collections::{BTreeMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use vitaplan_shared::{DietPreference, Goal, bail};

use crate::dish::{DishCatalog, DishRecord, Nutrition};
use crate::filter::{
    DishFilter, MIN_CAL_PER_DISH, matches_diet, normalize_allergies, triggers_allergy,
};
use crate::search::{MAX_ITEMS_PER_MEAL, NO_SUITABLE_DISHES, SearchLimits, choose_meal};

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
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Share of the daily calorie target.
    pub fn fraction(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.30,
            MealSlot::Lunch => 0.40,
            MealSlot::Dinner => 0.30,
        }
    }

    /// Slot target rounded to one decimal.
    pub fn target_kcal(self, daily_kcal: f64) -> f64 {
        (self.fraction() * daily_kcal * 10.0).round() / 10.0
    }
}

/// A dish placed in a meal slot, with everything needed to display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedDish {
    pub name: String,
    pub localized_names: BTreeMap<String, String>,
    pub ingredients: Vec<String>,
    pub image_ref: Option<String>,
    pub nutrition: Nutrition,
}

impl From<&DishRecord> for PlannedDish {
    fn from(dish: &DishRecord) -> Self {
        Self {
            name: dish.name.clone(),
            localized_names: dish.localized_names.clone(),
            ingredients: dish.ingredients.clone(),
            image_ref: dish.image_ref.clone(),
            nutrition: dish.nutrition,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlanEntry {
    pub slot: MealSlot,
    pub target_kcal: f64,
    /// Dish names, or the single "No suitable dishes" placeholder.
    pub names: Vec<String>,
    pub dishes: Vec<PlannedDish>,
    /// Exact sum of the dishes' nutrition.
    pub totals: Nutrition,
}

impl MealPlanEntry {
    fn unfilled(slot: MealSlot, target_kcal: f64) -> Self {
        Self {
            slot,
            target_kcal,
            names: vec![NO_SUITABLE_DISHES.to_owned()],
            dishes: Vec::new(),
            totals: Nutrition::default(),
        }
    }

    pub fn is_unfilled(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealSettings {
    pub limits: SearchLimits,
    pub filter: DishFilter,
}

#[derive(Debug, Clone)]
pub struct DayMealRequest {
    pub target_kcal: f64,
    pub goal: Goal,
    pub diet: DietPreference,
    pub include_eggs: bool,
    pub allergies: Vec<String>,
    /// Fixed seed for a reproducible day. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl DayMealRequest {
    pub fn new(target_kcal: f64) -> Self {
        Self {
            target_kcal,
            goal: Goal::default(),
            diet: DietPreference::default(),
            include_eggs: true,
            allergies: Vec::new(),
            seed: None,
        }
    }
}

/// Assembles breakfast, lunch and dinner from a dish catalog.
#[derive(Debug, Clone, Default)]
pub struct MealPlanner {
    settings: MealSettings,
}

impl MealPlanner {
    pub fn new(settings: MealSettings) -> Self {
        Self { settings }
    }

    #[tracing::instrument(
        skip_all,
        fields(target_kcal = request.target_kcal, goal = %request.goal, diet = %request.diet)
    )]
    pub fn plan_day(
        &self,
        catalog: &DishCatalog,
        request: &DayMealRequest,
    ) -> vitaplan_shared::Result<Vec<MealPlanEntry>> {
        if catalog.is_empty() {
            bail!(EmptyCatalog, "no dishes available");
        }

        if !request.target_kcal.is_finite() || request.target_kcal <= 0.0 {
            bail!(
                InvalidInput,
                "target_kcal must be > 0 (got {})",
                request.target_kcal
            );
        }

        let filter = &self.settings.filter;
        let allergies = normalize_allergies(request.allergies.as_slice());

        let eligible: Vec<&DishRecord> = catalog
            .dishes()
            .iter()
            .filter(|d| matches_diet(d, request.diet, request.include_eggs))
            .filter(|d| !triggers_allergy(d, &allergies))
            .filter(|d| !filter.is_banned(d))
            .filter(|d| d.nutrition.calories_kcal >= MIN_CAL_PER_DISH)
            .collect();

        let mains: Vec<&DishRecord> = eligible
            .iter()
            .copied()
            .filter(|d| filter.is_main(d))
            .collect();
        let mut sides: Vec<&DishRecord> = eligible
            .iter()
            .copied()
            .filter(|d| filter.is_side(d))
            .collect();

        if mains.is_empty() {
            bail!(
                EmptyCatalog,
                "no suitable main dish after filtering {} dishes",
                catalog.len()
            );
        }

        if sides.is_empty() {
            sides = mains.clone();
        }

        let seed = request.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        tracing::debug!(
            seed,
            eligible = eligible.len(),
            mains = mains.len(),
            sides = sides.len(),
            "dish pools ready"
        );

        let mut used: HashSet<String> = HashSet::new();
        let mut plan = Vec::with_capacity(MealSlot::VARIANTS.len());

        for &slot in MealSlot::VARIANTS {
            let target_kcal = slot.target_kcal(request.target_kcal);

            let Some(choice) = choose_meal(
                &mains,
                &sides,
                target_kcal,
                request.goal,
                &used,
                &self.settings.limits,
                &mut rng,
            ) else {
                tracing::warn!(%slot, "no dish combination for slot");
                plan.push(MealPlanEntry::unfilled(slot, target_kcal));
                continue;
            };

            let dishes: Vec<PlannedDish> = choice
                .dishes
                .iter()
                .take(MAX_ITEMS_PER_MEAL)
                .map(|d| PlannedDish::from(*d))
                .collect();

            used.extend(dishes.iter().map(|d| d.name.clone()));

            plan.push(MealPlanEntry {
                slot,
                target_kcal,
                names: dishes.iter().map(|d| d.name.clone()).collect(),
                totals: dishes.iter().map(|d| &d.nutrition).sum(),
                dishes,
            });
        }

        Ok(plan)
    }
}

/// Plans breakfast, lunch and dinner for a daily calorie target.
///
/// Only the exact "weight loss" label (any case) applies the weight-loss fat
/// penalty; goal aliases and unrecognised goals plan as maintenance. Diet
/// labels are parsed leniently, unrecognised ones mean no restriction. Each
/// call draws a fresh seed.
pub fn plan_day_meals(
    dish_catalog: &DishCatalog,
    target_kcal: f64,
    fitness_goal: &str,
    diet_preference: &str,
    include_eggs: bool,
    allergies: &[String],
) -> vitaplan_shared::Result<Vec<MealPlanEntry>> {
    let goal = Goal::parse_exact(fitness_goal);
    if goal.as_ref() != fitness_goal.trim().to_lowercase() {
        tracing::debug!(fitness_goal, "not a canonical goal label, planning for maintenance");
    }
    let diet = diet_preference.trim().parse().unwrap_or_else(|_| {
        tracing::debug!(diet_preference, "unrecognised diet preference, not restricting");
        DietPreference::default()
    });

    let request = DayMealRequest {
        target_kcal,
        goal,
        diet,
        include_eggs,
        allergies: allergies.to_vec(),
        seed: None,
    };

    MealPlanner::default().plan_day(dish_catalog, &request)
}
