use vitaplan_meal::{DietClass, DishCatalog, DishRecord, Nutrition};

pub fn dish(
    name: &str,
    diet: DietClass,
    kcal: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
) -> DishRecord {
    DishRecord::new(name, Nutrition::new(kcal, protein, fat, carbs))
        .unwrap()
        .with_diet_class(diet)
        .with_ingredients([format!("{name} base")])
        .with_image(format!("{}.jpg", name.to_lowercase().replace(' ', "-")))
        .with_localized_name("hi", format!("{name} (hi)"))
}

/// Mixed catalog with enough mains and sides for every slot.
pub fn mixed_catalog() -> DishCatalog {
    DishCatalog::from(vec![
        dish("Chicken curry", DietClass::NonVeg, 420.0, 32.0, 18.0, 12.0)
            .with_localized_name("ms", "Kari ayam"),
        dish("Grilled fish", DietClass::NonVeg, 300.0, 35.0, 12.0, 2.0),
        dish("Chana masala", DietClass::Vegan, 320.0, 16.0, 8.0, 45.0),
        dish("Tofu stir fry", DietClass::Vegan, 310.0, 20.0, 14.0, 22.0),
        dish("Rajma", DietClass::Vegan, 340.0, 17.0, 6.0, 52.0),
        dish("Paneer bhurji", DietClass::Vegetarian, 360.0, 22.0, 24.0, 20.0)
            .with_allergens(["milk"]),
        dish("Egg curry", DietClass::Vegetarian, 330.0, 18.0, 20.0, 21.0)
            .with_allergens(["egg"]),
        dish("Peanut chicken", DietClass::NonVeg, 450.0, 34.0, 22.0, 20.0)
            .with_allergens(["peanuts"]),
        dish("Satay tofu", DietClass::Vegan, 380.0, 19.0, 18.0, 30.0)
            .with_allergens(["Peanut", "soy"]),
        dish("Cucumber raita", DietClass::Vegetarian, 130.0, 6.0, 4.0, 12.0)
            .with_allergens(["milk"]),
        dish("Jeera rice", DietClass::Vegan, 200.0, 4.0, 0.5, 44.0),
        dish("Mixed salad", DietClass::Vegan, 140.0, 3.0, 8.0, 14.0),
        dish("Roti", DietClass::Vegan, 160.0, 5.0, 3.0, 28.0),
        dish("Mango lassi sweetened", DietClass::Vegetarian, 250.0, 6.0, 5.0, 45.0),
        dish("Masala chai tea", DietClass::Vegetarian, 150.0, 4.0, 5.0, 20.0),
        dish("Pickle", DietClass::Vegan, 40.0, 0.5, 3.0, 2.0),
    ])
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}
