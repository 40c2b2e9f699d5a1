// ABOUTME: Route handler for the multipart health assessment form
// ABOUTME: Parses form fields and delegates to AssessmentService on a blocking thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment routes
//!
//! `POST /api/` takes a `multipart/form-data` body with `height`, `weight`,
//! `age`, `gender`, an optional `image` file and an optional `diseases_info`.
//! Missing or non-integer required fields fail with a 400 error envelope.
//!
//! The upload limit applies while the body is read, before any field is
//! validated: an oversized body is a 413 even when the gender is invalid.

use crate::{
    constants::{form_fields, routes},
    errors::{AppError, AppResult, ErrorCode},
    models::{AssessmentRequest, AssessmentResponse, UploadedImage},
    services::AssessmentService,
};
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{header, StatusCode},
    routing::post,
    Json, Router,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// State shared by the assessment handlers
#[derive(Clone)]
struct AssessmentState {
    service: Arc<AssessmentService>,
    upload_limit: usize,
}

/// Assessment routes implementation
pub struct AssessmentRoutes;

impl AssessmentRoutes {
    /// Create the assessment routes; bodies over `upload_limit` bytes get a 413
    pub fn routes(service: Arc<AssessmentService>, upload_limit: usize) -> Router {
        Router::new()
            .route(routes::ASSESSMENT, post(Self::handle_assess))
            .layer(DefaultBodyLimit::max(upload_limit))
            .with_state(AssessmentState {
                service,
                upload_limit,
            })
    }

    async fn handle_assess(
        State(state): State<AssessmentState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<AssessmentResponse>> {
        let multipart = multipart.map_err(|rejection| {
            AppError::invalid_format(format!("Expected a multipart form: {rejection}"))
        })?;
        let request = read_assessment_form(multipart, state.upload_limit).await?;
        let service = state.service;
        debug!(
            height_cm = request.height_cm,
            weight_kg = request.weight_kg,
            age = request.age,
            has_image = request.image.is_some(),
            "Received assessment form"
        );

        // Image decoding and the calculators are CPU-bound
        let response = tokio::task::spawn_blocking(move || service.assess(&request))
            .await
            .map_err(|error| AppError::internal(format!("Assessment task failed: {error}")))??;

        Ok(Json(response))
    }
}

/// Text fields and the image part, first occurrence wins
#[derive(Default)]
struct RawForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl RawForm {
    fn required(&self, name: &str) -> AppResult<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AppError::missing_field(name))
    }

    fn integer<T: FromStr>(&self, name: &str) -> AppResult<T> {
        let raw = self.required(name)?;
        raw.trim().parse().map_err(|_| {
            AppError::invalid_format(format!("Field '{name}' must be an integer, got '{raw}'"))
        })
    }

    fn into_request(mut self) -> AppResult<AssessmentRequest> {
        Ok(AssessmentRequest {
            height_cm: self.integer(form_fields::HEIGHT)?,
            weight_kg: self.integer(form_fields::WEIGHT)?,
            age: self.integer(form_fields::AGE)?,
            gender: self.required(form_fields::GENDER)?.to_owned(),
            diseases_info: self.fields.remove(form_fields::DISEASES_INFO),
            image: self.image,
        })
    }
}

fn multipart_error(error: &MultipartError, upload_limit: usize) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::new(
            ErrorCode::PayloadTooLarge,
            format!("Upload exceeds the {upload_limit} byte limit"),
        )
    } else {
        AppError::invalid_format(error.body_text())
    }
}

/// Read the assessment form from a multipart body
///
/// An `image` part with no filename and no bytes is what browsers send for an
/// untouched file input, so it counts as no image. The image content type is
/// taken verbatim from the part header.
///
/// # Errors
///
/// Returns an error if the body is malformed or larger than `upload_limit`,
/// or if a required field is missing or not an integer
pub async fn read_assessment_form(
    mut multipart: Multipart,
    upload_limit: usize,
) -> AppResult<AssessmentRequest> {
    let mut form = RawForm::default();
    let read_error = |error: MultipartError| multipart_error(&error, upload_limit);

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == form_fields::IMAGE {
            let content_type = field
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let file_name = field.file_name().map(str::to_owned);
            let bytes = field.bytes().await.map_err(read_error)?;

            let untouched_input = bytes.is_empty() && file_name.unwrap_or_default().is_empty();
            if form.image.is_none() && !untouched_input {
                form.image = Some(UploadedImage {
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field.text().await.map_err(read_error)?;
            form.fields.entry(name).or_insert(value);
        }
    }

    form.into_request()
}
