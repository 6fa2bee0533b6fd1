use std::collections::{BTreeMap, HashSet};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;
use vitaplan_shared::row::{optional_text, required_number, text_list};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DietClass {
    #[strum(to_string = "vegan")]
    Vegan,
    #[strum(to_string = "vegetarian", serialize = "veg")]
    Vegetarian,
    #[strum(to_string = "non-veg", serialize = "non_veg", serialize = "nonveg")]
    NonVeg,
    #[default]
    #[strum(to_string = "unknown")]
    Unknown,
}

impl DietClass {
    pub fn parse(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or_default()
    }
}

/// Calories and macronutrients of a dish or a combination of dishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Validate)]
pub struct Nutrition {
    #[validate(range(exclusive_min = 0.0))]
    pub calories_kcal: f64,
    #[validate(range(min = 0.0))]
    pub protein_g: f64,
    #[validate(range(min = 0.0))]
    pub fat_g: f64,
    #[validate(range(min = 0.0))]
    pub carbohydrate_g: f64,
}

impl Nutrition {
    pub fn new(calories_kcal: f64, protein_g: f64, fat_g: f64, carbohydrate_g: f64) -> Self {
        Self {
            calories_kcal,
            protein_g,
            fat_g,
            carbohydrate_g,
        }
    }

    /// Grams of protein per 100 kcal.
    pub fn protein_density(&self) -> f64 {
        if self.calories_kcal > 0.0 {
            self.protein_g / self.calories_kcal * 100.0
        } else {
            0.0
        }
    }

    /// Every field rounded to one decimal, for display.
    pub fn rounded(&self) -> Self {
        let round = |v: f64| (v * 10.0).round() / 10.0;

        Self {
            calories_kcal: round(self.calories_kcal),
            protein_g: round(self.protein_g),
            fat_g: round(self.fat_g),
            carbohydrate_g: round(self.carbohydrate_g),
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories_kcal: self.calories_kcal + rhs.calories_kcal,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbohydrate_g: self.carbohydrate_g + rhs.carbohydrate_g,
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Nutrition> for Nutrition {
    fn sum<I: Iterator<Item = &'a Nutrition>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Dish row as handed over by the catalog store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishRow {
    #[serde(default, alias = "name")]
    pub dish_name: Option<Value>,
    #[serde(default, alias = "names")]
    pub localized_names: Option<Value>,
    #[serde(default, alias = "veg_class")]
    pub diet_class: Option<Value>,
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default, alias = "allergen_tags")]
    pub allergens: Option<Value>,
    #[serde(default)]
    pub calories_kcal: Option<Value>,
    #[serde(default)]
    pub protein_g: Option<Value>,
    #[serde(default)]
    pub fat_g: Option<Value>,
    #[serde(default)]
    pub carbohydrate_g: Option<Value>,
    #[serde(default, alias = "image_ref")]
    pub image_url: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct DishRecord {
    #[validate(length(min = 1))]
    pub name: String,
    pub localized_names: BTreeMap<String, String>,
    pub diet_class: DietClass,
    pub ingredients: Vec<String>,
    /// Lowercase, trimmed, unique allergen tags in catalog order.
    pub allergen_tags: Vec<String>,
    #[validate(nested)]
    pub nutrition: Nutrition,
    pub image_ref: Option<String>,
}

impl DishRecord {
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> vitaplan_shared::Result<Self> {
        let record = Self {
            name: name.into().trim().to_owned(),
            localized_names: BTreeMap::new(),
            diet_class: DietClass::Unknown,
            ingredients: Vec::new(),
            allergen_tags: Vec::new(),
            nutrition,
            image_ref: None,
        };

        record.validate()?;

        Ok(record)
    }

    pub fn with_diet_class(mut self, diet_class: DietClass) -> Self {
        self.diet_class = diet_class;
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allergen_tags = normalize_tags(allergens);
        self
    }

    pub fn with_localized_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.localized_names.insert(locale.into(), name.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Allergen tags joined the way allergy terms are matched against.
    pub fn allergen_text(&self) -> String {
        self.allergen_tags.join(", ")
    }

    pub fn lowercase_name(&self) -> String {
        self.name.to_lowercase()
    }
}

impl TryFrom<DishRow> for DishRecord {
    type Error = vitaplan_shared::Error;

    fn try_from(row: DishRow) -> Result<Self, Self::Error> {
        let name = optional_text(row.dish_name.as_ref()).unwrap_or_default();
        let nutrition = Nutrition::new(
            required_number(row.calories_kcal.as_ref(), "calories_kcal")?,
            required_number(row.protein_g.as_ref(), "protein_g")?,
            required_number(row.fat_g.as_ref(), "fat_g")?,
            required_number(row.carbohydrate_g.as_ref(), "carbohydrate_g")?,
        );

        let mut record = Self::new(name, nutrition)?
            .with_ingredients(text_list(row.ingredients.as_ref()))
            .with_allergens(text_list(row.allergens.as_ref()));

        record.diet_class = optional_text(row.diet_class.as_ref())
            .map(|v| DietClass::parse(&v))
            .unwrap_or_default();
        record.image_ref = optional_text(row.image_url.as_ref());

        if let Some(Value::Object(names)) = row.localized_names {
            record.localized_names = names
                .iter()
                .filter_map(|(locale, v)| Some((locale.clone(), optional_text(Some(v))?)))
                .collect();
        }

        Ok(record)
    }
}

fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();

    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }

    out
}

/// Typed dish catalog. Names are unique; the first row with a given name wins.
#[derive(Debug, Clone, Default)]
pub struct DishCatalog {
    dishes: Vec<DishRecord>,
    skipped: usize,
    duplicates: usize,
}

impl DishCatalog {
    pub fn from_rows(rows: impl IntoIterator<Item = DishRow>) -> Self {
        let mut catalog = Self::default();
        let mut seen = HashSet::new();

        for (index, row) in rows.into_iter().enumerate() {
            match DishRecord::try_from(row) {
                Ok(dish) => catalog.push_unique(dish, &mut seen),
                Err(err) => {
                    tracing::warn!(row = index, error = %err, "skipping dish row");
                    catalog.skipped += 1;
                }
            }
        }

        catalog
    }

    fn push_unique(&mut self, dish: DishRecord, seen: &mut HashSet<String>) {
        if seen.insert(dish.name.clone()) {
            self.dishes.push(dish);
        } else {
            tracing::debug!(name = %dish.name, "duplicate dish ignored");
            self.duplicates += 1;
        }
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }

    pub fn get(&self, name: &str) -> Option<&DishRecord> {
        self.dishes.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

impl From<Vec<DishRecord>> for DishCatalog {
    fn from(dishes: Vec<DishRecord>) -> Self {
        let mut catalog = Self::default();
        let mut seen = HashSet::new();

        for dish in dishes {
            catalog.push_unique(dish, &mut seen);
        }

        catalog
    }
}
