use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Fitness goal driving both the activity scorer and the meal fat penalty.
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
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[strum(to_string = "weight loss", serialize = "fat loss", serialize = "lose weight")]
    WeightLoss,
    #[strum(
        to_string = "muscle gain",
        serialize = "build muscle",
        serialize = "hypertrophy"
    )]
    MuscleGain,
    #[default]
    #[strum(to_string = "maintenance", serialize = "maintain health")]
    Maintenance,
}

impl Goal {
    /// Parses a free-form goal label. Unrecognised labels fall back to
    /// [`Goal::Maintenance`].
    pub fn parse(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or_default()
    }

    /// Parses only the canonical labels ("weight loss", "muscle gain",
    /// "maintenance"), ignoring case and surrounding whitespace. Aliases and
    /// unrecognised labels fall back to [`Goal::Maintenance`].
    pub fn parse_exact(value: &str) -> Self {
        let value = value.trim().to_lowercase();

        Self::VARIANTS
            .iter()
            .copied()
            .find(|goal| goal.as_ref() == value)
            .unwrap_or_default()
    }

    pub fn is_weight_loss(&self) -> bool {
        matches!(self, Self::WeightLoss)
    }
}

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
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    #[strum(to_string = "vegan")]
    Vegan,
    #[strum(to_string = "vegetarian", serialize = "veg")]
    Vegetarian,
    #[strum(to_string = "non-veg", serialize = "non_veg", serialize = "nonveg")]
    NonVeg,
    #[default]
    #[strum(to_string = "any")]
    Any,
}

impl DietPreference {
    /// Parses a free-form diet label. Unrecognised labels fall back to
    /// [`DietPreference::Any`].
    pub fn parse(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_aliases() {
        assert_eq!(Goal::parse("weight loss"), Goal::WeightLoss);
        assert_eq!(Goal::parse("Fat Loss"), Goal::WeightLoss);
        assert_eq!(Goal::parse("  lose weight "), Goal::WeightLoss);
        assert_eq!(Goal::parse("hypertrophy"), Goal::MuscleGain);
        assert_eq!(Goal::parse("BUILD MUSCLE"), Goal::MuscleGain);
        assert_eq!(Goal::parse("maintain health"), Goal::Maintenance);
    }

    #[test]
    fn test_goal_unknown_falls_back_to_maintenance() {
        assert_eq!(Goal::parse(""), Goal::Maintenance);
        assert_eq!(Goal::parse("get shredded"), Goal::Maintenance);
    }

    #[test]
    fn test_goal_parse_exact_ignores_aliases() {
        assert_eq!(Goal::parse_exact(" Weight Loss "), Goal::WeightLoss);
        assert_eq!(Goal::parse_exact("muscle gain"), Goal::MuscleGain);
        assert_eq!(Goal::parse_exact("fat loss"), Goal::Maintenance);
        assert_eq!(Goal::parse_exact("lose weight"), Goal::Maintenance);
        assert_eq!(Goal::parse_exact("hypertrophy"), Goal::Maintenance);
    }

    #[test]
    fn test_goal_display_uses_canonical_label() {
        assert_eq!(Goal::WeightLoss.to_string(), "weight loss");
        assert_eq!(Goal::MuscleGain.as_ref(), "muscle gain");
    }

    #[test]
    fn test_diet_preference_parse() {
        assert_eq!(DietPreference::parse("Vegan"), DietPreference::Vegan);
        assert_eq!(DietPreference::parse("vegetarian"), DietPreference::Vegetarian);
        assert_eq!(DietPreference::parse("non-veg"), DietPreference::NonVeg);
        assert_eq!(DietPreference::parse("whatever"), DietPreference::Any);
    }
}
