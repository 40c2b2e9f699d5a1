// ABOUTME: Daily nutrition need calculation using peer-reviewed scientific formulas
// ABOUTME: BMR, daily calories, macronutrient grams, fiber and water targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//!
//! - Institute of Medicine (2005). Dietary Reference Intakes for Energy,
//!   Carbohydrate, Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids.

use crate::config::intelligence::{BmrConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Energy content per gram of protein and carbohydrate (kcal)
const KCAL_PER_G_PROTEIN_OR_CARB: f64 = 4.0;
/// Energy content per gram of fat (kcal)
const KCAL_PER_G_FAT: f64 = 9.0;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

impl Gender {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse of "male" / "female"
impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// Daily nutrition need
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionNeed {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr_kcal: f64,
    /// Daily calorie target (kcal/day)
    pub calories_kcal: f64,
    /// Protein (g/day)
    pub protein_g: f64,
    /// Carbohydrates (g/day)
    pub carbs_g: f64,
    /// Fat (g/day)
    pub fat_g: f64,
    /// Fiber (g/day)
    pub fiber_g: f64,
    /// Water (ml/day)
    pub water_ml: f64,
    /// Calculation method used
    pub method: String,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::out_of_range(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::out_of_range(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::out_of_range(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + gender_constant;

    Ok(bmr.max(config.minimum_bmr_kcal))
}

/// Compute the daily nutrition need for one person
///
/// Calories are BMR times the configured activity factor. Protein is set per
/// kilogram, fat takes a fixed share of calories (never below the per-kg
/// floor) and carbohydrates fill the remaining energy.
///
/// # Errors
///
/// Returns an error if weight, height or age fall outside the formula's range
pub fn get_dietary_need(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &NutritionConfig,
) -> AppResult<NutritionNeed> {
    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, &config.bmr)?;
    let macros = &config.macros;

    let calories = bmr * macros.activity_factor;
    let protein_g = weight_kg * macros.protein_g_per_kg;
    let fat_g = (calories * macros.fat_percent_of_calories / 100.0 / KCAL_PER_G_FAT)
        .max(weight_kg * macros.fat_min_g_per_kg);

    let remaining_kcal =
        calories - protein_g * KCAL_PER_G_PROTEIN_OR_CARB - fat_g * KCAL_PER_G_FAT;
    let carbs_g = (remaining_kcal / KCAL_PER_G_PROTEIN_OR_CARB).max(0.0);

    Ok(NutritionNeed {
        bmr_kcal: bmr.round(),
        calories_kcal: calories.round(),
        protein_g: protein_g.round(),
        carbs_g: carbs_g.round(),
        fat_g: fat_g.round(),
        fiber_g: (calories / 1000.0 * macros.fiber_g_per_1000_kcal).round(),
        water_ml: (weight_kg * macros.water_ml_per_kg).round(),
        method: "Mifflin-St Jeor".into(),
    })
}
