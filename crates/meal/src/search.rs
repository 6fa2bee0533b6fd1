use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use vitaplan_shared::Goal;

use crate::dish::{DishRecord, Nutrition};
use crate::scoring::score_combo;

/// Shown in place of dish names when a slot cannot be filled.
pub const NO_SUITABLE_DISHES: &str = "No suitable dishes";
pub const MAX_ITEMS_PER_MEAL: usize = 3;

/// Caps on how much of the shuffled pools the combination search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Mains tried alone and paired with one side.
    pub mains: usize,
    /// Mains tried with two sides.
    pub triple_mains: usize,
    pub sides: usize,
    /// The pick is uniform among this many best combinations.
    pub top_k: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            mains: 20,
            triple_mains: 15,
            sides: 30,
            top_k: 5,
        }
    }
}

/// A scored dish combination for one meal slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MealChoice<'a> {
    pub dishes: Vec<&'a DishRecord>,
    pub totals: Nutrition,
    pub score: f64,
}

impl MealChoice<'_> {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dishes.iter().map(|d| d.name.as_str())
    }
}

/// Picks a main with up to two sides for `target_kcal`.
///
/// Dishes named in `used` are left out unless that empties a pool. Returns
/// `None` when no main is available.
pub fn choose_meal<'a, R: Rng + ?Sized>(
    mains: &[&'a DishRecord],
    sides: &[&'a DishRecord],
    target_kcal: f64,
    goal: Goal,
    used: &HashSet<String>,
    limits: &SearchLimits,
    rng: &mut R,
) -> Option<MealChoice<'a>> {
    let mut mains = without_used(mains, used);
    let mut sides = without_used(sides, used);

    if mains.is_empty() {
        return None;
    }

    mains.shuffle(rng);
    sides.shuffle(rng);

    let mut combos = enumerate(&mains, &sides, limits)
        .into_iter()
        .map(|dishes| {
            let (score, totals) = score_combo(&dishes, target_kcal, goal);
            MealChoice {
                dishes,
                totals,
                score,
            }
        })
        .collect::<Vec<_>>();

    combos.sort_by(|a, b| a.score.total_cmp(&b.score));

    tracing::trace!(
        mains = mains.len(),
        sides = sides.len(),
        combos = combos.len(),
        "meal combinations scored"
    );

    let top = limits.top_k.max(1).min(combos.len());
    combos[..top].choose(rng).cloned()
}

/// Drops dishes named in `used`; falls back to the whole pool when nothing
/// would be left.
fn without_used<'a>(pool: &[&'a DishRecord], used: &HashSet<String>) -> Vec<&'a DishRecord> {
    let fresh: Vec<&DishRecord> = pool
        .iter()
        .copied()
        .filter(|d| !used.contains(&d.name))
        .collect();

    if fresh.is_empty() {
        pool.to_vec()
    } else {
        fresh
    }
}

fn enumerate<'a>(
    mains: &[&'a DishRecord],
    sides: &[&'a DishRecord],
    limits: &SearchLimits,
) -> Vec<Vec<&'a DishRecord>> {
    let sides = &sides[..sides.len().min(limits.sides)];
    let mut combos = Vec::new();

    for &main in mains.iter().take(limits.mains) {
        combos.push(vec![main]);
    }

    for &main in mains.iter().take(limits.mains) {
        for &side in sides {
            push_distinct(&mut combos, vec![main, side]);
        }
    }

    for &main in mains.iter().take(limits.triple_mains) {
        for (j, &first) in sides.iter().enumerate() {
            for &second in &sides[j + 1..] {
                push_distinct(&mut combos, vec![main, first, second]);
            }
        }
    }

    combos
}

fn push_distinct<'a>(combos: &mut Vec<Vec<&'a DishRecord>>, dishes: Vec<&'a DishRecord>) {
    let names: HashSet<&str> = dishes.iter().map(|d| d.name.as_str()).collect();

    if names.len() == dishes.len() {
        combos.push(dishes);
    }
}
