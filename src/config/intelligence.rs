// ABOUTME: Tunable coefficients for the assessment collaborators
// ABOUTME: BMR formula, daily macro targets, BMI bands and glucose thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment Analysis Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - BMI bands: WHO Technical Report Series 894 (2000)
//! - Glucose: American Diabetes Association, Standards of Care (2023)

use serde::{Deserialize, Serialize};

/// Configuration shared by the standard analysis engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    /// Daily nutrition need settings
    pub nutrition: NutritionConfig,
    /// BMI category thresholds
    pub bmi: BmiConfig,
    /// Fasting glucose thresholds
    pub glucose: GlucoseConfig,
}

/// Daily nutrition need configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Daily macro targets
    pub macros: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Floor applied to the computed BMR (kcal/day)
    pub minimum_bmr_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            minimum_bmr_kcal: 1000.0,
        }
    }
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientConfig {
    /// Activity multiplier applied to BMR. The form carries no activity
    /// level, so a lightly active lifestyle (1.375) is assumed.
    pub activity_factor: f64,
    /// Protein (g/kg bodyweight), moderate activity: 1.2
    pub protein_g_per_kg: f64,
    /// Fat share of daily calories: 28%
    pub fat_percent_of_calories: f64,
    /// Fat floor (g/kg bodyweight): 0.6
    pub fat_min_g_per_kg: f64,
    /// Fiber per 1000 kcal (g): 14
    pub fiber_g_per_1000_kcal: f64,
    /// Water per kg bodyweight (ml): 35
    pub water_ml_per_kg: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            activity_factor: 1.375,
            protein_g_per_kg: 1.2,
            fat_percent_of_calories: 28.0,
            fat_min_g_per_kg: 0.6,
            fiber_g_per_1000_kcal: 14.0,
            water_ml_per_kg: 35.0,
        }
    }
}

/// BMI category boundaries (WHO)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiConfig {
    /// Below this is underweight
    pub underweight_below: f64,
    /// Upper edge of the healthy band used for dream weight
    pub healthy_upper: f64,
    /// At or above this is overweight
    pub overweight_from: f64,
    /// At or above this is obese
    pub obese_from: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            healthy_upper: 24.9,
            overweight_from: 25.0,
            obese_from: 30.0,
        }
    }
}

/// Fasting plasma glucose thresholds (mg/dL)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlucoseConfig {
    /// Below this is hypoglycemia
    pub hypoglycemia_below: f64,
    /// At or above this is prediabetes
    pub prediabetes_from: f64,
    /// At or above this is diabetes
    pub diabetes_from: f64,
}

impl Default for GlucoseConfig {
    fn default() -> Self {
        Self {
            hypoglycemia_below: 70.0,
            prediabetes_from: 100.0,
            diabetes_from: 126.0,
        }
    }
}
