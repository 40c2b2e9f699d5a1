// ABOUTME: Built-in dish catalogue used by the meal planner
// ABOUTME: Each dish carries its meal slot, diet and nutrient tags and contraindications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::diseases::Disease;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When in the day a dish is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between meals
    Snack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        })
    }
}

/// Catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dish {
    /// Display name
    pub name: &'static str,
    /// Lowercase cuisine name
    pub cuisine: &'static str,
    /// Meal slot
    pub slot: MealSlot,
    /// Contains no meat, fish or egg
    pub vegetarian: bool,
    /// Diet tags the dish satisfies, e.g. `low_fat_diet`
    pub diet_tags: &'static [&'static str],
    /// Nutrients the dish is rich in, e.g. `calcium`
    pub nutrient_tags: &'static [&'static str],
    /// Diseases for which the dish must not be recommended
    pub avoid_for: &'static [Disease],
    /// Approximate energy per serving
    pub calories_kcal: u32,
}

const WEIGHT_AND_SUGAR: &[Disease] = &[
    Disease::Overweight,
    Disease::Obesity,
    Disease::Prediabetes,
    Disease::Diabetes,
];

/// The catalogue
pub const DISHES: &[Dish] = &[
    // Breakfast
    Dish {
        name: "Vegetable Poha",
        cuisine: "indian",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet"],
        nutrient_tags: &["iron", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 250,
    },
    Dish {
        name: "Moong Dal Chilla",
        cuisine: "indian",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &["high_protein_diet", "low_fat_diet", "diabetic_diet"],
        nutrient_tags: &["protein", "iron", "fiber"],
        avoid_for: &[],
        calories_kcal: 220,
    },
    Dish {
        name: "Masala Omelette",
        cuisine: "indian",
        slot: MealSlot::Breakfast,
        vegetarian: false,
        diet_tags: &["high_protein_diet", "low_carb_diet", "diabetic_diet"],
        nutrient_tags: &["protein", "vitamin_d"],
        avoid_for: &[],
        calories_kcal: 230,
    },
    Dish {
        name: "Ragi Porridge",
        cuisine: "indian",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &["low_sodium_diet", "high_fiber_diet"],
        nutrient_tags: &["calcium", "iron", "fiber"],
        avoid_for: &[],
        calories_kcal: 240,
    },
    Dish {
        name: "Aloo Paratha",
        cuisine: "indian",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &[],
        nutrient_tags: &["potassium"],
        avoid_for: WEIGHT_AND_SUGAR,
        calories_kcal: 420,
    },
    Dish {
        name: "Greek Yogurt Parfait",
        cuisine: "mediterranean",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &["low_sodium_diet", "high_protein_diet"],
        nutrient_tags: &["calcium", "vitamin_c", "protein"],
        avoid_for: &[],
        calories_kcal: 260,
    },
    Dish {
        name: "Oatmeal with Berries",
        cuisine: "american",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &["low_sodium_diet", "low_fat_diet", "high_fiber_diet"],
        nutrient_tags: &["fiber", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 280,
    },
    Dish {
        name: "Pancakes with Syrup",
        cuisine: "american",
        slot: MealSlot::Breakfast,
        vegetarian: true,
        diet_tags: &[],
        nutrient_tags: &[],
        avoid_for: WEIGHT_AND_SUGAR,
        calories_kcal: 520,
    },
    // Lunch
    Dish {
        name: "Rajma Chawal",
        cuisine: "indian",
        slot: MealSlot::Lunch,
        vegetarian: true,
        diet_tags: &["high_fiber_diet", "low_fat_diet"],
        nutrient_tags: &["protein", "iron", "fiber"],
        avoid_for: &[],
        calories_kcal: 450,
    },
    Dish {
        name: "Tandoori Chicken with Salad",
        cuisine: "indian",
        slot: MealSlot::Lunch,
        vegetarian: false,
        diet_tags: &["high_protein_diet", "low_fat_diet", "low_carb_diet", "diabetic_diet"],
        nutrient_tags: &["protein", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 380,
    },
    Dish {
        name: "Palak Paneer with Roti",
        cuisine: "indian",
        slot: MealSlot::Lunch,
        vegetarian: true,
        diet_tags: &["high_protein_diet"],
        nutrient_tags: &["calcium", "iron", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 430,
    },
    Dish {
        name: "Fish Curry with Brown Rice",
        cuisine: "indian",
        slot: MealSlot::Lunch,
        vegetarian: false,
        diet_tags: &["low_fat_diet", "high_protein_diet"],
        nutrient_tags: &["omega_3", "protein", "vitamin_d"],
        avoid_for: &[],
        calories_kcal: 470,
    },
    Dish {
        name: "Chole Bhature",
        cuisine: "indian",
        slot: MealSlot::Lunch,
        vegetarian: true,
        diet_tags: &[],
        nutrient_tags: &["fiber"],
        avoid_for: WEIGHT_AND_SUGAR,
        calories_kcal: 650,
    },
    Dish {
        name: "Grilled Chicken Quinoa Bowl",
        cuisine: "american",
        slot: MealSlot::Lunch,
        vegetarian: false,
        diet_tags: &["high_protein_diet", "low_fat_diet", "low_sodium_diet"],
        nutrient_tags: &["protein", "fiber"],
        avoid_for: &[],
        calories_kcal: 480,
    },
    Dish {
        name: "Lentil Soup with Greens",
        cuisine: "mediterranean",
        slot: MealSlot::Lunch,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet", "high_fiber_diet", "diabetic_diet"],
        nutrient_tags: &["iron", "fiber", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 350,
    },
    // Snack
    Dish {
        name: "Roasted Chana",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet", "high_fiber_diet"],
        nutrient_tags: &["protein", "fiber", "iron"],
        avoid_for: &[],
        calories_kcal: 150,
    },
    Dish {
        name: "Sprout Chaat",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet", "diabetic_diet"],
        nutrient_tags: &["vitamin_c", "fiber", "protein"],
        avoid_for: &[],
        calories_kcal: 140,
    },
    Dish {
        name: "Fruit Bowl with Amla",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet"],
        nutrient_tags: &["vitamin_c", "potassium"],
        avoid_for: &[Disease::Diabetes],
        calories_kcal: 120,
    },
    Dish {
        name: "Masala Chaas",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &["low_fat_diet"],
        nutrient_tags: &["calcium"],
        avoid_for: &[Disease::Underweight],
        calories_kcal: 60,
    },
    Dish {
        name: "Samosa",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &[],
        nutrient_tags: &[],
        avoid_for: WEIGHT_AND_SUGAR,
        calories_kcal: 260,
    },
    Dish {
        name: "Almonds and Orange",
        cuisine: "mediterranean",
        slot: MealSlot::Snack,
        vegetarian: true,
        diet_tags: &["low_sodium_diet", "diabetic_diet"],
        nutrient_tags: &["calcium", "vitamin_c"],
        avoid_for: &[],
        calories_kcal: 200,
    },
    Dish {
        name: "Boiled Egg Chaat",
        cuisine: "indian",
        slot: MealSlot::Snack,
        vegetarian: false,
        diet_tags: &["high_protein_diet", "low_carb_diet"],
        nutrient_tags: &["protein", "vitamin_d"],
        avoid_for: &[],
        calories_kcal: 160,
    },
    // Dinner
    Dish {
        name: "Grilled Fish with Sauteed Vegetables",
        cuisine: "mediterranean",
        slot: MealSlot::Dinner,
        vegetarian: false,
        diet_tags: &["low_fat_diet", "low_sodium_diet", "high_protein_diet", "low_carb_diet"],
        nutrient_tags: &["omega_3", "vitamin_c", "protein"],
        avoid_for: &[],
        calories_kcal: 420,
    },
    Dish {
        name: "Chicken Curry with Roti",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: false,
        diet_tags: &["high_protein_diet"],
        nutrient_tags: &["protein", "iron"],
        avoid_for: &[],
        calories_kcal: 520,
    },
    Dish {
        name: "Dal Tadka with Brown Rice",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "high_fiber_diet"],
        nutrient_tags: &["protein", "fiber", "iron"],
        avoid_for: &[],
        calories_kcal: 430,
    },
    Dish {
        name: "Egg Bhurji with Multigrain Roti",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: false,
        diet_tags: &["high_protein_diet"],
        nutrient_tags: &["protein", "vitamin_d"],
        avoid_for: &[],
        calories_kcal: 400,
    },
    Dish {
        name: "Paneer Tikka with Mint Chutney",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: true,
        diet_tags: &["high_protein_diet", "low_carb_diet", "diabetic_diet"],
        nutrient_tags: &["calcium", "protein"],
        avoid_for: &[],
        calories_kcal: 380,
    },
    Dish {
        name: "Butter Chicken with Naan",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: false,
        diet_tags: &[],
        nutrient_tags: &["protein"],
        avoid_for: WEIGHT_AND_SUGAR,
        calories_kcal: 780,
    },
    Dish {
        name: "Vegetable Khichdi",
        cuisine: "indian",
        slot: MealSlot::Dinner,
        vegetarian: true,
        diet_tags: &["low_fat_diet", "low_sodium_diet"],
        nutrient_tags: &["fiber", "potassium"],
        avoid_for: &[],
        calories_kcal: 360,
    },
];

/// Distinct cuisines present in the catalogue
#[must_use]
pub fn cuisines() -> Vec<&'static str> {
    let mut cuisines: Vec<&'static str> = DISHES.iter().map(|dish| dish.cuisine).collect();
    cuisines.sort_unstable();
    cuisines.dedup();
    cuisines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_has_dishes() {
        for slot in MealSlot::ALL {
            assert!(
                DISHES.iter().filter(|d| d.slot == slot).count() >= 4,
                "{slot} is under-populated"
            );
        }
    }

    #[test]
    fn test_every_slot_has_a_vegetarian_option_safe_for_all_diseases() {
        for slot in MealSlot::ALL {
            assert!(DISHES
                .iter()
                .any(|d| d.slot == slot && d.vegetarian && d.avoid_for.is_empty()));
        }
    }

    #[test]
    fn test_cuisines_are_deduplicated() {
        assert_eq!(cuisines(), vec!["american", "indian", "mediterranean"]);
    }
}
