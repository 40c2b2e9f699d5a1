// ABOUTME: One-day meal plan generation from diet, nutrient and food preference tags
// ABOUTME: Filters the dish catalogue by disease and diet, then ranks each meal slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan generation
//!
//! Selection runs per meal slot:
//!
//! 1. drop dishes contraindicated by any inferred disease
//! 2. drop non-vegetarian dishes when a vegetarian preference tag is present
//! 3. score: 3 per matched diet tag, 2 per matched nutrient tag, 4 when the
//!    dish cuisine is named in the free-text preference
//! 4. keep the best [`OPTIONS_PER_SLOT`] dishes, ties broken by name
//!
//! Unknown tags never match and are otherwise ignored.

use crate::errors::{AppError, AppResult};
use crate::intelligence::diseases::{Disease, DiseaseSet};
use crate::intelligence::meal_catalog::{self, Dish, MealSlot, DISHES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dishes offered per meal slot
pub const OPTIONS_PER_SLOT: usize = 2;

const DIET_TAG_WEIGHT: u32 = 3;
const NUTRIENT_TAG_WEIGHT: u32 = 2;
const CUISINE_WEIGHT: u32 = 4;

/// Preference tags that restrict the plan to vegetarian dishes
const VEGETARIAN_TAGS: [&str; 3] = ["veg", "vegetarian", "vegan"];

/// A recommended dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishRecommendation {
    /// Dish name
    pub name: String,
    /// Cuisine
    pub cuisine: String,
    /// Approximate energy per serving
    pub calories_kcal: u32,
    /// Requested diet and nutrient tags this dish satisfies
    pub matched_tags: Vec<String>,
    /// Ranking score
    pub score: u32,
}

/// One-day meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Cuisine named in the free-text preference, if any
    pub target_cuisine: Option<String>,
    /// Vegetarian-only selection
    pub vegetarian: bool,
    /// Breakfast options
    pub breakfast: Vec<DishRecommendation>,
    /// Lunch options
    pub lunch: Vec<DishRecommendation>,
    /// Snack options
    pub snack: Vec<DishRecommendation>,
    /// Dinner options
    pub dinner: Vec<DishRecommendation>,
    /// Diseases the selection was filtered for
    pub avoided_for: Vec<Disease>,
}

/// Cuisines from the catalogue that appear as words in `text`
fn mentioned_cuisines(text: &str) -> BTreeSet<&'static str> {
    let words: BTreeSet<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect();

    meal_catalog::cuisines()
        .into_iter()
        .filter(|cuisine| words.contains(*cuisine))
        .collect()
}

fn normalize_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn recommend(
    dish: &Dish,
    diet_tags: &BTreeSet<String>,
    nutrient_tags: &BTreeSet<String>,
    cuisines: &BTreeSet<&'static str>,
) -> DishRecommendation {
    let matched_diet: Vec<String> = dish
        .diet_tags
        .iter()
        .filter(|tag| diet_tags.contains(**tag))
        .map(|&tag| tag.to_owned())
        .collect();
    let matched_nutrients: Vec<String> = dish
        .nutrient_tags
        .iter()
        .filter(|tag| nutrient_tags.contains(**tag))
        .map(|&tag| tag.to_owned())
        .collect();

    let mut score = DIET_TAG_WEIGHT * matched_diet.len() as u32
        + NUTRIENT_TAG_WEIGHT * matched_nutrients.len() as u32;
    if cuisines.contains(dish.cuisine) {
        score += CUISINE_WEIGHT;
    }

    DishRecommendation {
        name: dish.name.to_owned(),
        cuisine: dish.cuisine.to_owned(),
        calories_kcal: dish.calories_kcal,
        matched_tags: matched_diet.into_iter().chain(matched_nutrients).collect(),
        score,
    }
}

/// Generate a one-day meal plan
///
/// # Errors
///
/// Returns `ResourceNotFound` if the filters leave a meal slot without any dish
pub fn get_meal_plan(
    dietary_tags: &[String],
    diseases: &DiseaseSet,
    nutrient_tags: &[String],
    preference_tags: &[String],
    preference_text: &str,
) -> AppResult<MealPlan> {
    let diet_tags = normalize_tags(dietary_tags);
    let nutrient_tags = normalize_tags(nutrient_tags);
    let vegetarian = normalize_tags(preference_tags)
        .iter()
        .any(|tag| VEGETARIAN_TAGS.contains(&tag.as_str()));
    let cuisines = mentioned_cuisines(preference_text);

    let pick = |slot: MealSlot| -> AppResult<Vec<DishRecommendation>> {
        let mut candidates: Vec<DishRecommendation> = DISHES
            .iter()
            .filter(|dish| dish.slot == slot)
            .filter(|dish| !dish.avoid_for.iter().any(|d| diseases.contains(d)))
            .filter(|dish| !vegetarian || dish.vegetarian)
            .map(|dish| recommend(dish, &diet_tags, &nutrient_tags, &cuisines))
            .collect();

        if candidates.is_empty() {
            return Err(AppError::not_found(format!(
                "A {slot} dish matching the dietary restrictions"
            )));
        }

        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        candidates.truncate(OPTIONS_PER_SLOT);
        Ok(candidates)
    };

    Ok(MealPlan {
        target_cuisine: cuisines.iter().next().map(|&c| c.to_owned()),
        vegetarian,
        breakfast: pick(MealSlot::Breakfast)?,
        lunch: pick(MealSlot::Lunch)?,
        snack: pick(MealSlot::Snack)?,
        dinner: pick(MealSlot::Dinner)?,
        avoided_for: diseases.iter().copied().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    fn default_plan(diseases: &DiseaseSet) -> MealPlan {
        get_meal_plan(
            &tags(&["low_sodium_diet", "low_fat_diet"]),
            diseases,
            &tags(&["calcium", "vitamin_c"]),
            &tags(&["non-veg"]),
            "i love indian",
        )
        .unwrap()
    }

    #[test]
    fn test_default_inputs_prefer_indian_low_fat_low_sodium() {
        let plan = default_plan(&DiseaseSet::new());

        assert_eq!(plan.target_cuisine.as_deref(), Some("indian"));
        assert!(!plan.vegetarian);
        assert_eq!(plan.breakfast.len(), OPTIONS_PER_SLOT);
        assert_eq!(plan.breakfast[0].name, "Vegetable Poha");
        assert_eq!(plan.breakfast[0].score, 12);
        assert_eq!(plan.snack[0].name, "Fruit Bowl with Amla");
    }

    #[test]
    fn test_diabetes_removes_contraindicated_dishes() {
        let diseases: DiseaseSet = [Disease::Diabetes].into_iter().collect();
        let plan = default_plan(&diseases);

        assert!(plan.snack.iter().all(|d| d.name != "Fruit Bowl with Amla"));
        assert_eq!(plan.avoided_for, vec![Disease::Diabetes]);
    }

    #[test]
    fn test_vegetarian_preference_filters_meat() {
        let plan = get_meal_plan(
            &tags(&["high_protein_diet"]),
            &DiseaseSet::new(),
            &tags(&["protein"]),
            &tags(&["Veg"]),
            "",
        )
        .unwrap();

        assert!(plan.vegetarian);
        assert!(plan.target_cuisine.is_none());
        let names: Vec<&str> = plan
            .breakfast
            .iter()
            .chain(&plan.lunch)
            .chain(&plan.snack)
            .chain(&plan.dinner)
            .map(|d| d.name.as_str())
            .collect();
        assert!(!names
            .iter()
            .any(|n| n.contains("Chicken") || n.contains("Egg") || n.contains("Fish")));
    }

    #[test]
    fn test_cuisine_detection_is_word_based() {
        assert!(mentioned_cuisines("Indian, please!").contains("indian"));
        assert!(mentioned_cuisines("indiana jones").is_empty());
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let plan = get_meal_plan(
            &tags(&["moon_diet"]),
            &DiseaseSet::new(),
            &tags(&["unobtainium"]),
            &[],
            "",
        )
        .unwrap();
        assert!(plan.lunch.iter().all(|d| d.score == 0 && d.matched_tags.is_empty()));
    }
}
