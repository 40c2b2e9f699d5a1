// ABOUTME: AssessmentEngine trait bundling the analysis collaborators behind one seam
// ABOUTME: StandardEngine wires the built-in calculators to their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::IntelligenceConfig;
use crate::errors::AppResult;
use crate::intelligence::blood_report::{
    BloodSugarAnalyzer, BloodSugarLevel, ColorimetricStripAnalyzer,
};
use crate::intelligence::diseases::{self, DiseaseSet};
use crate::intelligence::meal_planner::{self, MealPlan};
use crate::intelligence::medic;
use crate::intelligence::nutrition_calculator::{self, Gender, NutritionNeed};
use crate::intelligence::workout_recommender::{self, WorkoutPlan};
use image::RgbImage;

/// Analysis collaborators used by the assessment pipeline
///
/// Implementations must be free of side effects: the pipeline computes
/// BMI before it validates the image and discards the work on rejection.
pub trait AssessmentEngine: Send + Sync {
    /// Body mass index from weight (kg) and height (cm)
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive inputs
    fn calculate_bmi(&self, weight_kg: f64, height_cm: f64) -> AppResult<f64>;

    /// Target weight for the healthy BMI band
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive inputs
    fn calculate_dream_weight(&self, weight_kg: f64, bmi: f64) -> AppResult<f64>;

    /// Blood sugar reading from a decoded report image
    ///
    /// # Errors
    ///
    /// Returns an error if no reading can be extracted
    fn analyze_blood_sugar_report(&self, image: &RgbImage) -> AppResult<BloodSugarLevel>;

    /// Health-risk categories from an optional blood sugar signal and BMI
    ///
    /// # Errors
    ///
    /// Implementations may reject inputs they cannot classify
    fn get_diseases(&self, blood_sugar: Option<BloodSugarLevel>, bmi: f64)
        -> AppResult<DiseaseSet>;

    /// Daily nutrition need
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range biometrics
    fn get_dietary_need(
        &self,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
    ) -> AppResult<NutritionNeed>;

    /// Weekly workout plan; `gender` is passed as the user typed it
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown gender or non-positive weights
    fn predict_workout_plan(
        &self,
        gender: &str,
        age: u32,
        weight_kg: f64,
        dream_weight_kg: f64,
        bmi: f64,
    ) -> AppResult<WorkoutPlan>;

    /// One-day meal plan
    ///
    /// # Errors
    ///
    /// Returns an error if no dish fits a meal slot
    fn get_meal_plan(
        &self,
        dietary_tags: &[String],
        diseases: &DiseaseSet,
        nutrient_tags: &[String],
        preference_tags: &[String],
        preference_text: &str,
    ) -> AppResult<MealPlan>;
}

/// Built-in collaborators
pub struct StandardEngine {
    config: IntelligenceConfig,
    analyzer: Box<dyn BloodSugarAnalyzer>,
}

impl StandardEngine {
    /// Engine with custom thresholds and analyzer
    #[must_use]
    pub fn new(config: IntelligenceConfig, analyzer: Box<dyn BloodSugarAnalyzer>) -> Self {
        Self { config, analyzer }
    }
}

impl Default for StandardEngine {
    fn default() -> Self {
        Self::new(
            IntelligenceConfig::default(),
            Box::new(ColorimetricStripAnalyzer::default()),
        )
    }
}

impl AssessmentEngine for StandardEngine {
    fn calculate_bmi(&self, weight_kg: f64, height_cm: f64) -> AppResult<f64> {
        medic::calculate_bmi(weight_kg, height_cm)
    }

    fn calculate_dream_weight(&self, weight_kg: f64, bmi: f64) -> AppResult<f64> {
        medic::calculate_dream_weight(weight_kg, bmi, &self.config.bmi)
    }

    fn analyze_blood_sugar_report(&self, image: &RgbImage) -> AppResult<BloodSugarLevel> {
        self.analyzer.analyze(image)
    }

    fn get_diseases(
        &self,
        blood_sugar: Option<BloodSugarLevel>,
        bmi: f64,
    ) -> AppResult<DiseaseSet> {
        Ok(diseases::get_diseases(
            blood_sugar,
            bmi,
            &self.config.bmi,
            &self.config.glucose,
        ))
    }

    fn get_dietary_need(
        &self,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
    ) -> AppResult<NutritionNeed> {
        nutrition_calculator::get_dietary_need(
            weight_kg,
            height_cm,
            age,
            gender,
            &self.config.nutrition,
        )
    }

    fn predict_workout_plan(
        &self,
        gender: &str,
        age: u32,
        weight_kg: f64,
        dream_weight_kg: f64,
        bmi: f64,
    ) -> AppResult<WorkoutPlan> {
        workout_recommender::predict_workout_plan(gender, age, weight_kg, dream_weight_kg, bmi)
    }

    fn get_meal_plan(
        &self,
        dietary_tags: &[String],
        diseases: &DiseaseSet,
        nutrient_tags: &[String],
        preference_tags: &[String],
        preference_text: &str,
    ) -> AppResult<MealPlan> {
        meal_planner::get_meal_plan(
            dietary_tags,
            diseases,
            nutrient_tags,
            preference_tags,
            preference_text,
        )
    }
}
