// ABOUTME: Transport data models of the health assessment API
// ABOUTME: Re-exports the request, report and response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Request-scoped types. Nothing here is persisted.

/// Assessment request and response
pub mod assessment;

pub use assessment::{AssessmentReport, AssessmentRequest, AssessmentResponse, UploadedImage};
