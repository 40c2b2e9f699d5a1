// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Assessment orchestration and the workout review extension point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Protocol-agnostic business logic. Route handlers parse transport input
//! and delegate here.

/// Assessment orchestration
pub mod assessment;

/// Workout plan review hook
pub mod workout_review;

pub use assessment::{AssessmentRejection, AssessmentService};
pub use workout_review::{PassThroughReview, WorkoutPlanReview};
