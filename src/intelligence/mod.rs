// ABOUTME: Analysis collaborators used by the health assessment pipeline
// ABOUTME: BMI, blood report reading, disease inference, nutrition, workout and meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, deterministic calculators. The assessment pipeline reaches them
//! through the [`AssessmentEngine`] trait so tests can substitute recording
//! doubles.

/// Blood sugar extraction from report images
pub mod blood_report;
/// Disease inference
pub mod diseases;
/// Collaborator trait and default wiring
pub mod engine;
/// Dish catalogue
pub mod meal_catalog;
/// Meal plan generation
pub mod meal_planner;
/// BMI and dream weight
pub mod medic;
/// BMR and daily nutrition need
pub mod nutrition_calculator;
/// Workout plan prediction
pub mod workout_recommender;

pub use blood_report::{BloodSugarAnalyzer, BloodSugarLevel, ColorimetricStripAnalyzer};
pub use diseases::{Disease, DiseaseSet};
pub use engine::{AssessmentEngine, StandardEngine};
pub use meal_planner::{DishRecommendation, MealPlan};
pub use nutrition_calculator::{Gender, NutritionNeed};
pub use workout_recommender::{WorkoutPlan, WorkoutSession};
