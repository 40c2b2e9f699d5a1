// ABOUTME: Body mass index and healthy target ("dream") weight calculations
// ABOUTME: Both are pure functions of the submitted weight and height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI and dream weight
//!
//! BMI = weight (kg) / height (m)^2, WHO (2000).
//!
//! Dream weight is the weight that would place the same person inside the
//! healthy BMI band: `dream = weight * target_bmi / bmi`, where the target is
//! the given BMI clamped into the band. It works from the BMI as passed in,
//! which [`calculate_bmi`] has already rounded, so it can differ from
//! `target_bmi * height^2` by 0.1 kg.

use crate::config::intelligence::BmiConfig;
use crate::errors::{AppError, AppResult};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate BMI from weight in kilograms and height in centimetres
///
/// The result is rounded to two decimals.
///
/// # Errors
///
/// Returns an error if weight or height is not strictly positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be greater than 0 kg"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be greater than 0 cm"));
    }

    let height_m = height_cm / 100.0;
    Ok(round_to(weight_kg / (height_m * height_m), 2))
}

/// Calculate the weight that brings `bmi` into the healthy band
///
/// Already-healthy BMIs return the current weight. The result is rounded to
/// one decimal.
///
/// # Errors
///
/// Returns an error if weight or BMI is not strictly positive
pub fn calculate_dream_weight(weight_kg: f64, bmi: f64, config: &BmiConfig) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be greater than 0 kg"));
    }
    if bmi <= 0.0 {
        return Err(AppError::invalid_input("BMI must be greater than 0"));
    }

    let target_bmi = bmi.clamp(config.underweight_below, config.healthy_upper);
    Ok(round_to(weight_kg * target_bmi / bmi, 1))
}
