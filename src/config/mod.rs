// ABOUTME: Configuration module root for environment and analysis settings
// ABOUTME: Re-exports the server configuration loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven server configuration
pub mod environment;

/// Coefficients and thresholds for the analysis collaborators
pub mod intelligence;

pub use environment::{AssessmentConfig, Environment, MealPlanDefaults, ServerConfig};
pub use intelligence::IntelligenceConfig;
