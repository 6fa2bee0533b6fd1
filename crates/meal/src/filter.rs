use serde::{Deserialize, Serialize};
use vitaplan_shared::{DietPreference, KeywordTable};

use crate::dish::{DietClass, DishRecord};

pub const MIN_CAL_PER_DISH: f64 = 120.0;
pub const SIDE_MAX_KCAL: f64 = 350.0;
pub const MAIN_MIN_KCAL: f64 = 250.0;
pub const MAIN_MIN_PROTEIN_G: f64 = 15.0;
/// Grams of protein per 100 kcal.
pub const MAIN_MIN_PROT_DENS: f64 = 7.0;
pub const FAT_BOMB_RATIO: f64 = 2.0;
pub const FAT_BOMB_MAX_CARBS_G: f64 = 20.0;

const SIDE_NAME_TERMS: [&str; 2] = ["nut", "seed"];
const EGG: &str = "egg";

/// Main/side classification of the dish catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishFilter {
    /// Name keywords that rule a dish out entirely.
    pub banned: KeywordTable,
}

impl Default for DishFilter {
    fn default() -> Self {
        Self {
            banned: default_banned(),
        }
    }
}

impl DishFilter {
    /// Drinks, alcohol, sweets and plain-carb items with almost no protein or fat.
    pub fn is_banned(&self, dish: &DishRecord) -> bool {
        if self.banned.matches(&dish.lowercase_name()) {
            return true;
        }

        let n = &dish.nutrition;
        n.protein_g < 1.0 && n.fat_g <= 1.0 && n.carbohydrate_g >= 30.0
    }

    pub fn is_main(&self, dish: &DishRecord) -> bool {
        if self.is_banned(dish) {
            return false;
        }

        let n = &dish.nutrition;
        if n.calories_kcal < MAIN_MIN_KCAL || n.calories_kcal < MIN_CAL_PER_DISH {
            return false;
        }

        if n.protein_g < MAIN_MIN_PROTEIN_G && n.protein_density() < MAIN_MIN_PROT_DENS {
            return false;
        }

        !(n.fat_g > FAT_BOMB_RATIO * n.protein_g && n.carbohydrate_g < FAT_BOMB_MAX_CARBS_G)
    }

    pub fn is_side(&self, dish: &DishRecord) -> bool {
        if self.is_banned(dish) {
            return false;
        }

        if dish.nutrition.calories_kcal <= SIDE_MAX_KCAL {
            return true;
        }

        let name = dish.lowercase_name();
        SIDE_NAME_TERMS.iter().any(|t| name.contains(t))
    }
}

/// Whether a dish fits the diet preference.
///
/// Vegetarian keeps unknown dishes. With `include_eggs == false` it also drops
/// any dish mentioning egg in its allergens or name.
pub fn matches_diet(dish: &DishRecord, preference: DietPreference, include_eggs: bool) -> bool {
    match preference {
        DietPreference::Vegan => dish.diet_class == DietClass::Vegan,
        DietPreference::Vegetarian => {
            if dish.diet_class == DietClass::NonVeg {
                return false;
            }

            include_eggs
                || !(dish.allergen_text().contains(EGG) || dish.lowercase_name().contains(EGG))
        }
        DietPreference::NonVeg | DietPreference::Any => true,
    }
}

/// Lowercases and trims allergy terms, dropping empty ones.
pub fn normalize_allergies<S: AsRef<str>>(allergies: &[S]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    for allergy in allergies {
        let term = allergy.as_ref().trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}

/// Whether any normalized allergy term appears in the dish's allergen text.
pub fn triggers_allergy(dish: &DishRecord, allergies: &[String]) -> bool {
    if allergies.is_empty() {
        return false;
    }

    let text = dish.allergen_text();
    allergies.iter().any(|a| text.contains(a.as_str()))
}

fn default_banned() -> KeywordTable {
    KeywordTable::new()
        .with(
            "alcohol",
            [
                "beer", "lager", "ale", "wine", "cider", "whisky", "whiskey", "vodka", "rum", "gin",
                "soju", "sake", "liqueur", "brandy",
            ],
        )
        .with(
            "beverage",
            [
                "coffee",
                "tea",
                "cola",
                "soda",
                "soft drink",
                "energy drink",
                "water",
                "sparkling",
                "milk tea",
                "bubble tea",
            ],
        )
        .with(
            "dessert_sweet",
            [
                "sugar",
                "honey",
                "syrup",
                "candy",
                "dessert",
                "ice cream",
                "gelato",
                "chocolate",
                "cake",
                "cupcake",
                "cookie",
                "biscuit",
                "pastry",
                "donut",
                "doughnut",
                "sweet",
                "caramel",
                "jam",
                "jelly",
                "marshmallow",
                "sweetened",
                "toffee",
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::Nutrition;

    fn dish(name: &str, kcal: f64, protein: f64, fat: f64, carbs: f64) -> DishRecord {
        DishRecord::new(name, Nutrition::new(kcal, protein, fat, carbs)).unwrap()
    }

    #[test]
    fn test_banned_by_name() {
        let filter = DishFilter::default();

        assert!(filter.is_banned(&dish("Red Wine", 125.0, 0.1, 0.0, 4.0)));
        assert!(filter.is_banned(&dish("Masala chai tea", 120.0, 3.0, 3.0, 15.0)));
        assert!(filter.is_banned(&dish("Chocolate fudge", 400.0, 5.0, 20.0, 50.0)));
    }

    #[test]
    fn test_banned_plain_carb() {
        let filter = DishFilter::default();

        assert!(filter.is_banned(&dish("Boiled rice", 200.0, 0.5, 0.5, 45.0)));
        assert!(!filter.is_banned(&dish("Boiled rice", 200.0, 4.0, 0.5, 45.0)));
    }

    #[test]
    fn test_main_by_protein_grams() {
        let filter = DishFilter::default();

        assert!(filter.is_main(&dish("Chicken curry", 420.0, 30.0, 18.0, 12.0)));
    }

    #[test]
    fn test_main_needs_calories() {
        let filter = DishFilter::default();

        // 7.8 g per 100 kcal, but below 250 kcal
        assert!(!filter.is_main(&dish("Egg bhurji", 180.0, 14.0, 10.0, 3.0)));
        assert!(filter.is_main(&dish("Tofu scramble", 260.0, 18.0, 12.0, 10.0)));
    }

    #[test]
    fn test_low_protein_is_not_main() {
        let filter = DishFilter::default();

        assert!(!filter.is_main(&dish("Veg pulao", 300.0, 6.0, 8.0, 50.0)));
    }

    #[test]
    fn test_fat_bomb_is_not_main() {
        let filter = DishFilter::default();

        assert!(!filter.is_main(&dish("Butter paneer", 500.0, 16.0, 40.0, 10.0)));
        // enough carbs to escape the fat-bomb rule
        assert!(filter.is_main(&dish("Paneer wrap", 500.0, 16.0, 40.0, 30.0)));
    }

    #[test]
    fn test_side_rules() {
        let filter = DishFilter::default();

        assert!(filter.is_side(&dish("Cucumber raita", 150.0, 5.0, 4.0, 10.0)));
        assert!(!filter.is_side(&dish("Veg biryani", 450.0, 8.0, 12.0, 70.0)));
        assert!(filter.is_side(&dish("Roasted peanuts", 570.0, 26.0, 49.0, 16.0)));
        assert!(filter.is_side(&dish("Pumpkin seeds mix", 560.0, 30.0, 49.0, 11.0)));
    }

    #[test]
    fn test_vegan_filter() {
        let vegan = dish("Chana masala", 300.0, 12.0, 8.0, 40.0).with_diet_class(DietClass::Vegan);
        let veg = dish("Palak paneer", 300.0, 14.0, 20.0, 10.0).with_diet_class(DietClass::Vegetarian);

        assert!(matches_diet(&vegan, DietPreference::Vegan, true));
        assert!(!matches_diet(&veg, DietPreference::Vegan, true));
    }

    #[test]
    fn test_vegetarian_without_eggs() {
        let curry = dish("Egg curry", 300.0, 14.0, 20.0, 10.0).with_diet_class(DietClass::Vegetarian);
        let tikka = dish("Paneer tikka", 300.0, 18.0, 15.0, 8.0)
            .with_diet_class(DietClass::Vegetarian)
            .with_allergens(["Milk", "Egg"]);
        let dal = dish("Dal tadka", 250.0, 12.0, 6.0, 35.0).with_diet_class(DietClass::Vegetarian);
        let fish = dish("Fish fry", 300.0, 25.0, 15.0, 8.0).with_diet_class(DietClass::NonVeg);

        assert!(!matches_diet(&curry, DietPreference::Vegetarian, false));
        assert!(!matches_diet(&tikka, DietPreference::Vegetarian, false));
        assert!(matches_diet(&dal, DietPreference::Vegetarian, false));
        assert!(matches_diet(&curry, DietPreference::Vegetarian, true));
        assert!(!matches_diet(&fish, DietPreference::Vegetarian, true));
        assert!(matches_diet(&fish, DietPreference::Any, false));
    }

    #[test]
    fn test_allergy_filter() {
        let satay = dish("Chicken satay", 350.0, 28.0, 18.0, 10.0).with_allergens(["Peanuts", "Soy"]);
        let allergies = normalize_allergies(&[" PEANUT ", "", "peanut"]);

        assert_eq!(allergies, ["peanut"]);
        assert!(triggers_allergy(&satay, &allergies));
        assert!(!triggers_allergy(&satay, &normalize_allergies(&["gluten"])));
        assert!(!triggers_allergy(&satay, &[]));
    }
}
