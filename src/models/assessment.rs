// ABOUTME: Request and response models of the health assessment endpoint
// ABOUTME: The response is either the full report or a handled {error} body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::mime_types::SUPPORTED_IMAGE_TYPES;
use crate::intelligence::{MealPlan, NutritionNeed, WorkoutPlan};
use serde::{Deserialize, Serialize};

/// Uploaded blood report image, not yet decoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedImage {
    /// Declared MIME type of the form part
    pub content_type: Option<String>,
    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// Image with a declared MIME type
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            bytes: bytes.into(),
        }
    }

    /// Declared MIME type without parameters, casing kept
    #[must_use]
    pub fn mime_essence(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .and_then(|value| value.split(';').next())
            .map(str::trim)
    }

    /// Declared type is exactly `image/jpeg` or `image/png`
    #[must_use]
    pub fn has_supported_type(&self) -> bool {
        self.mime_essence()
            .is_some_and(|essence| SUPPORTED_IMAGE_TYPES.contains(&essence))
    }
}

/// Parsed assessment form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    /// Height in centimetres
    pub height_cm: i32,
    /// Weight in kilograms
    pub weight_kg: i32,
    /// Age in years
    pub age: u32,
    /// Gender exactly as submitted
    pub gender: String,
    /// Optional blood report
    pub image: Option<UploadedImage>,
    /// Optional free-text disease note
    pub diseases_info: Option<String>,
}

impl AssessmentRequest {
    /// Request without image or disease note
    pub fn new(height_cm: i32, weight_kg: i32, age: u32, gender: impl Into<String>) -> Self {
        Self {
            height_cm,
            weight_kg,
            age,
            gender: gender.into(),
            image: None,
            diseases_info: None,
        }
    }

    /// Attach a blood report image
    #[must_use]
    pub fn with_image(mut self, image: UploadedImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach a disease note
    #[must_use]
    pub fn with_diseases_info(mut self, info: impl Into<String>) -> Self {
        self.diseases_info = Some(info.into());
        self
    }

    /// Disease note, if present and non-empty
    #[must_use]
    pub fn diseases_note(&self) -> Option<&str> {
        self.diseases_info.as_deref().filter(|info| !info.is_empty())
    }
}

/// Successful assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    /// Daily nutrition need
    pub need: NutritionNeed,
    /// Weekly workout plan
    pub workout_plan: WorkoutPlan,
    /// One-day meal plan
    pub meal_plan: MealPlan,
}

/// Body of `POST /api/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AssessmentResponse {
    /// Full report
    Report(AssessmentReport),
    /// Handled validation or image failure
    Rejected {
        /// User-facing message
        error: String,
    },
}

impl AssessmentResponse {
    /// Rejection message, if this is a rejection
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Rejected { error } => Some(error),
        }
    }

    /// Report, if this is a success
    #[must_use]
    pub const fn report(&self) -> Option<&AssessmentReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_essence_strips_parameters() {
        let image = UploadedImage::new("image/png; charset=binary", vec![1]);
        assert_eq!(image.mime_essence(), Some("image/png"));
        assert!(image.has_supported_type());
    }

    #[test]
    fn test_mime_type_comparison_is_case_sensitive() {
        let image = UploadedImage::new("IMAGE/PNG; foo=bar", vec![1]);
        assert_eq!(image.mime_essence(), Some("IMAGE/PNG"));
        assert!(!image.has_supported_type());
        assert!(!UploadedImage::new("Image/Jpeg", vec![1]).has_supported_type());
    }

    #[test]
    fn test_missing_or_foreign_type_is_unsupported() {
        let untyped = UploadedImage {
            content_type: None,
            bytes: vec![1],
        };
        assert!(!untyped.has_supported_type());
        assert!(!UploadedImage::new("image/gif", vec![1]).has_supported_type());
        assert!(!UploadedImage::new("image/jpg", vec![1]).has_supported_type());
    }

    #[test]
    fn test_empty_diseases_info_is_no_note() {
        let request = AssessmentRequest::new(170, 70, 30, "Male").with_diseases_info("");
        assert!(request.diseases_note().is_none());
    }

    #[test]
    fn test_rejection_serializes_as_single_error_key() {
        let response = AssessmentResponse::Rejected {
            error: "nope".to_owned(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope" }));
    }
}
