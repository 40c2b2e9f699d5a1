// ABOUTME: Main library entry point for the health assessment API
// ABOUTME: Turns biometrics and an optional blood report into nutrition, workout and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Health Assessment Server
//!
//! One multipart form submission (height, weight, age, gender, an optional
//! blood report image) yields a daily nutrition need, a weekly workout plan
//! and a one-day meal plan.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers, multipart parsing
//! - **Services**: the assessment pipeline and its validation rules
//! - **Intelligence**: pure calculators behind the `AssessmentEngine` trait
//! - **Config**: environment-driven server and analysis settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_assessment_server::config::environment::ServerConfig;
//! use health_assessment_server::models::AssessmentRequest;
//! use health_assessment_server::services::AssessmentService;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let service = AssessmentService::standard(config.assessment);
//!
//!     let response = service.assess(&AssessmentRequest::new(170, 70, 30, "Male"))?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Used by the server binary and integration tests.

/// Configuration management
pub mod config;
/// Application constants and configuration values
pub mod constants;
/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;
/// Analysis collaborators
pub mod intelligence;
/// Production logging and structured output
pub mod logging;
/// HTTP middleware for request tracing and CORS
pub mod middleware;
/// Request and response models
pub mod models;
/// `HTTP` routes
pub mod routes;
/// Router assembly and serving
pub mod server;
/// Domain service layer
pub mod services;
