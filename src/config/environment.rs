// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars, meal_plan_defaults};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::info;

/// Environment type for logging and other deployment decisions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Meal plan inputs not derived from the request
///
/// Kept as configuration so a later iteration can source them per request
/// without touching the orchestration steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanDefaults {
    /// Dietary tags such as `low_sodium_diet`
    pub dietary_tags: Vec<String>,
    /// Nutrients to favour such as `calcium`
    pub nutrient_tags: Vec<String>,
    /// Preference tags such as `non-veg`
    pub preference_tags: Vec<String>,
    /// Free-text preference, scanned for cuisine names
    pub preference_text: String,
}

impl Default for MealPlanDefaults {
    fn default() -> Self {
        let owned = |tags: &[&str]| tags.iter().map(|&t| t.to_owned()).collect();
        Self {
            dietary_tags: owned(&meal_plan_defaults::DIETARY_TAGS),
            nutrient_tags: owned(&meal_plan_defaults::NUTRIENT_TAGS),
            preference_tags: owned(&meal_plan_defaults::PREFERENCE_TAGS),
            preference_text: meal_plan_defaults::PREFERENCE_TEXT.to_owned(),
        }
    }
}

/// Orchestration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentConfig {
    /// Feed the blood-sugar level read from an uploaded report into disease inference.
    /// Off by default: the image is decoded and validated but not analyzed.
    pub blood_report_analysis: bool,
    /// Fixed meal plan inputs
    pub meal_plan: MealPlanDefaults,
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Multipart body limit in bytes
    pub max_upload_bytes: usize,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Orchestration settings
    pub assessment: AssessmentConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            max_upload_bytes: defaults::MAX_UPLOAD_BYTES,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            assessment: AssessmentConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_env_or(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            max_upload_bytes: parse_env_or(
                env_vars::MAX_UPLOAD_BYTES,
                defaults::MAX_UPLOAD_BYTES,
            )?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            assessment: AssessmentConfig {
                blood_report_analysis: parse_bool(&env_var_or(
                    env_vars::BLOOD_REPORT_ANALYSIS_ENABLED,
                    "false",
                ))
                .with_context(|| {
                    format!("Invalid {}", env_vars::BLOOD_REPORT_ANALYSIS_ENABLED)
                })?,
                meal_plan: MealPlanDefaults::default(),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the upload limit is zero
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_BYTES must be non-zero"));
        }
        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Health Assessment Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Max Upload: {} bytes\n\
             - CORS Origins: {}\n\
             - Blood Report Analysis: {}",
            self.bind_address(),
            self.environment,
            self.max_upload_bytes,
            self.cors.allowed_origins,
            if self.assessment.blood_report_analysis {
                "Enabled"
            } else {
                "Disabled"
            },
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got {other:?}")),
    }
}
