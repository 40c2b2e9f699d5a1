// ABOUTME: Health assessment orchestration from biometrics and an optional blood report
// ABOUTME: Validates input, runs the analysis collaborators in order and assembles the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment pipeline
//!
//! Steps, in order:
//!
//! 1. gender must lowercase to `male` or `female`
//! 2. BMI and dream weight
//! 3. image content type must be jpeg or png
//! 4. image must be non-empty and decodable
//! 5. disease inference, with a blood sugar signal only when blood report
//!    analysis is enabled and an image was decoded
//! 6. nutrition need
//! 7. workout plan, with gender as submitted
//! 8. meal plan from the configured defaults
//! 9. workout review when a disease note is present
//!
//! Steps 1, 3 and 4 end the request with an [`AssessmentResponse::Rejected`]
//! body. Collaborator failures are returned as [`AppError`].

use crate::config::AssessmentConfig;
use crate::constants::{image_limits, messages};
use crate::errors::AppResult;
use crate::intelligence::{AssessmentEngine, BloodSugarLevel, Gender, StandardEngine};
use crate::models::{AssessmentReport, AssessmentRequest, AssessmentResponse, UploadedImage};
use crate::services::workout_review::{PassThroughReview, WorkoutPlanReview};
use image::io::{Limits, Reader};
use image::RgbImage;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Handled assessment outcome, returned to the client as `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentRejection {
    /// Gender is not male or female
    #[error("{}", messages::INVALID_GENDER)]
    InvalidGender,
    /// Image is neither jpeg nor png
    #[error("{}", messages::UNSUPPORTED_IMAGE_TYPE)]
    UnsupportedImageType,
    /// Image has no bytes
    #[error("{}", messages::EMPTY_IMAGE)]
    EmptyImage,
    /// Decoding or blood report analysis failed
    #[error("{prefix}{0}", prefix = messages::IMAGE_PROCESSING_PREFIX)]
    ImageProcessing(String),
}

impl From<AssessmentRejection> for AssessmentResponse {
    fn from(rejection: AssessmentRejection) -> Self {
        Self::Rejected {
            error: rejection.to_string(),
        }
    }
}

/// Runs assessments against a shared engine
#[derive(Clone)]
pub struct AssessmentService {
    engine: Arc<dyn AssessmentEngine>,
    review: Arc<dyn WorkoutPlanReview>,
    config: AssessmentConfig,
}

impl AssessmentService {
    /// Service with the pass-through workout review
    #[must_use]
    pub fn new(engine: Arc<dyn AssessmentEngine>, config: AssessmentConfig) -> Self {
        Self {
            engine,
            review: Arc::new(PassThroughReview),
            config,
        }
    }

    /// Service backed by [`StandardEngine`]
    #[must_use]
    pub fn standard(config: AssessmentConfig) -> Self {
        Self::new(Arc::new(StandardEngine::default()), config)
    }

    /// Replace the workout review
    #[must_use]
    pub fn with_review(mut self, review: Arc<dyn WorkoutPlanReview>) -> Self {
        self.review = review;
        self
    }

    /// Assess one request
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error. Validation failures are not
    /// errors, they come back as [`AssessmentResponse::Rejected`].
    pub fn assess(&self, request: &AssessmentRequest) -> AppResult<AssessmentResponse> {
        let gender = match request.gender.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => {
                info!(gender = %request.gender, "Assessment rejected: invalid gender");
                return Ok(AssessmentRejection::InvalidGender.into());
            }
        };

        let weight_kg = f64::from(request.weight_kg);
        let height_cm = f64::from(request.height_cm);

        let bmi = self.engine.calculate_bmi(weight_kg, height_cm)?;
        let dream_weight = self.engine.calculate_dream_weight(weight_kg, bmi)?;
        debug!(bmi, dream_weight, "Computed body composition");

        let blood_sugar = match request.image.as_ref() {
            Some(image) => match self.read_blood_report(image) {
                Ok(level) => level,
                Err(rejection) => {
                    info!(%rejection, "Assessment rejected: blood report image");
                    return Ok(rejection.into());
                }
            },
            None => None,
        };

        let diseases = self.engine.get_diseases(blood_sugar, bmi)?;
        debug!(?diseases, "Inferred diseases");

        let need = self
            .engine
            .get_dietary_need(weight_kg, height_cm, request.age, gender)?;

        // Gender goes through as submitted; the nutrition call gets the normalized value
        let workout_plan = self.engine.predict_workout_plan(
            &request.gender,
            request.age,
            weight_kg,
            dream_weight,
            bmi,
        )?;

        let defaults = &self.config.meal_plan;
        let meal_plan = self.engine.get_meal_plan(
            &defaults.dietary_tags,
            &diseases,
            &defaults.nutrient_tags,
            &defaults.preference_tags,
            &defaults.preference_text,
        )?;

        let workout_plan = match request.diseases_note() {
            Some(note) => self.review.review(workout_plan, note)?,
            None => workout_plan,
        };

        debug!(
            goal = ?workout_plan.goal,
            calories = need.calories_kcal,
            "Assessment complete"
        );

        Ok(AssessmentResponse::Report(AssessmentReport {
            need,
            workout_plan,
            meal_plan,
        }))
    }

    /// Validate and decode the image, then read it when analysis is enabled
    fn read_blood_report(
        &self,
        image: &UploadedImage,
    ) -> Result<Option<BloodSugarLevel>, AssessmentRejection> {
        if !image.has_supported_type() {
            return Err(AssessmentRejection::UnsupportedImageType);
        }
        if image.bytes.is_empty() {
            return Err(AssessmentRejection::EmptyImage);
        }

        let decoded = decode_rgb(&image.bytes)?;
        debug!(
            width = decoded.width(),
            height = decoded.height(),
            "Decoded blood report image"
        );

        if !self.config.blood_report_analysis {
            return Ok(None);
        }

        match self.engine.analyze_blood_sugar_report(&decoded) {
            Ok(level) => {
                debug!(%level, "Read blood sugar from report");
                Ok(Some(level))
            }
            Err(error) => {
                warn!(%error, "Blood report analysis failed");
                Err(AssessmentRejection::ImageProcessing(error.message))
            }
        }
    }
}

/// Decode with the format sniffed from the bytes, within [`image_limits`]
fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, AssessmentRejection> {
    let mut limits = Limits::default();
    limits.max_image_width = Some(image_limits::MAX_IMAGE_SIDE);
    limits.max_image_height = Some(image_limits::MAX_IMAGE_SIDE);
    limits.max_alloc = Some(image_limits::MAX_DECODE_ALLOC_BYTES);

    let mut reader = Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|error| AssessmentRejection::ImageProcessing(error.to_string()))?;
    reader.limits(limits);

    reader
        .decode()
        .map(|decoded| decoded.to_rgb8())
        .map_err(|error| AssessmentRejection::ImageProcessing(error.to_string()))
}
