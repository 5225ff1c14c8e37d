// ABOUTME: HTTP server binary for the pickleball practice planner
// ABOUTME: Loads configuration from the environment, initializes logging, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pickleball Planner Server Binary
//!
//! Serves plan generation, the drill catalog, and health endpoints.

use anyhow::Result;
use clap::Parser;
use pickleball_planner::{config::ServerConfig, logging, server, PlanGenerator};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pickleball-planner-server")]
#[command(about = "Pickleball practice planner - weekly drill plans over HTTP")]
#[command(version)]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting pickleball planner server");
    info!("{}", config.summary());

    let generator = PlanGenerator::default();
    if let Err(e) = server::serve(&config, generator).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
