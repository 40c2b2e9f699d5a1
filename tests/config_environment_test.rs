// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_assessment_server::config::environment::{Environment, ServerConfig};
use serial_test::serial;
use std::env;

const MANAGED_VARS: [&str; 6] = [
    "HOST",
    "HTTP_PORT",
    "MAX_UPLOAD_BYTES",
    "CORS_ALLOWED_ORIGINS",
    "BLOOD_REPORT_ANALYSIS_ENABLED",
    "ENVIRONMENT",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(!config.assessment.blood_report_analysis);
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9000");
    env::set_var("MAX_UPLOAD_BYTES", "2048");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://a.example,https://b.example");
    env::set_var("BLOOD_REPORT_ANALYSIS_ENABLED", "true");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    assert_eq!(config.max_upload_bytes, 2048);
    assert_eq!(
        config.cors.allowed_origins,
        "https://a.example,https://b.example"
    );
    assert!(config.assessment.blood_report_analysis);
    assert!(config.environment.is_production());
    assert!(config.summary().contains("Blood Report Analysis: Enabled"));
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_port() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");

    let result = ServerConfig::from_env();
    clear_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_PORT"), "got {message}");
}

#[test]
#[serial]
fn test_from_env_rejects_zero_upload_limit() {
    clear_env();
    env::set_var("MAX_UPLOAD_BYTES", "0");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_from_env_rejects_non_boolean_analysis_flag() {
    clear_env();
    env::set_var("BLOOD_REPORT_ANALYSIS_ENABLED", "sometimes");

    let result = ServerConfig::from_env();
    clear_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("BLOOD_REPORT_ANALYSIS_ENABLED"), "got {message}");
}

#[test]
fn test_validate_rejects_zero_port() {
    let config = ServerConfig {
        http_port: 0,
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(ServerConfig::default().validate().is_ok());
}

#[test]
fn test_summary_reports_disabled_analysis_by_default() {
    let summary = ServerConfig::default().summary();
    assert!(summary.contains("Bind: 127.0.0.1:8080"));
    assert!(summary.contains("Blood Report Analysis: Disabled"));
}
