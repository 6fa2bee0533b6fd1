use vitaplan_shared::Goal;

use crate::dish::{DishRecord, Nutrition};

pub const WEIGHT_LOSS_FAT_PENALTY: f64 = 0.6;
pub const MAINTENANCE_FAT_PENALTY: f64 = 0.25;
pub const PROTEIN_BONUS: f64 = 0.15;

pub fn fat_penalty(goal: Goal) -> f64 {
    if goal.is_weight_loss() {
        WEIGHT_LOSS_FAT_PENALTY
    } else {
        MAINTENANCE_FAT_PENALTY
    }
}

/// Scores a dish combination against a calorie target. Lower is better.
///
/// Returns the score together with the exact nutrition totals.
pub fn score_combo(dishes: &[&DishRecord], target_kcal: f64, goal: Goal) -> (f64, Nutrition) {
    let totals: Nutrition = dishes.iter().map(|d| &d.nutrition).sum();

    let score = (totals.calories_kcal - target_kcal).abs() + fat_penalty(goal) * totals.fat_g
        - PROTEIN_BONUS * totals.protein_g;

    (score, totals)
}
