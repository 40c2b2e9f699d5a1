// ABOUTME: Route module organization for the health assessment HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Handlers only translate HTTP into service calls; the assessment logic
//! lives in [`crate::services`].

/// Health assessment form route
pub mod assessment;
/// Health check and readiness routes
pub mod health;

pub use assessment::AssessmentRoutes;
pub use health::HealthRoutes;
