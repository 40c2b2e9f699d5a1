// ABOUTME: Server binary for the health assessment API
// ABOUTME: Loads configuration, initializes logging and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Assessment Server Binary
//!
//! Starts the HTTP API that turns one biometric form submission into a
//! nutrition need, a workout plan and a meal plan.

use anyhow::Result;
use clap::Parser;
use health_assessment_server::{
    config::environment::ServerConfig,
    constants::{routes, service_names},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "health-assessment-server")]
#[command(about = "Health assessment API - nutrition, workout and meal plans from biometrics")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting {}", service_names::HEALTH_ASSESSMENT_SERVER);
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display the available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    info!("   Assessment:  POST {base}{} (multipart/form-data)", routes::ASSESSMENT);
    info!("   Health:      GET  {base}{}", routes::HEALTH);
    info!("   Readiness:   GET  {base}{}", routes::READY);
}
