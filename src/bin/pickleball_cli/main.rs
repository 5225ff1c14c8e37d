// ABOUTME: Pickleball CLI - command-line front end for the practice plan engine
// ABOUTME: Generates plans, lists catalog drills, and shows the accepted profile options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pickleball CLI
//!
//! Usage:
//! ```bash
//! # Three 60-minute sessions focused on dinking and drops
//! pickleball-cli plan --rating 3.5 --weakness dinking --weakness drops --minutes 60 --days 3
//!
//! # Same plan as JSON, for a 12-year-old
//! pickleball-cli plan --rating 3.0 --weakness serves --weakness volleys \
//!     --minutes 30 --days 2 --youth --age 12 --format json
//!
//! # Drills a 3.5 player can use for dinking
//! pickleball-cli drills --skill dinking --rating 3.5
//!
//! # Full description of one drill
//! pickleball-cli drill "Wall Dink Practice"
//!
//! # Accepted skill areas, goals, session lengths
//! pickleball-cli options
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pickleball_planner::logging::{LogFormat, LoggingConfig};
use planner_core::constants::service_names;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pickleball-cli",
    about = "Pickleball practice planner CLI",
    long_about = "Generate deterministic weekly pickleball practice plans and browse the drill catalog.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Plan output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a weekly practice plan
    Plan {
        /// DUPR rating (2.0 - 6.0)
        #[arg(long)]
        rating: f64,

        /// Skill area to work on; repeat for each (at least 2)
        #[arg(long = "weakness", required = true)]
        weaknesses: Vec<String>,

        /// Session length in minutes (30, 60, 90, 120)
        #[arg(long, default_value = "60")]
        minutes: u32,

        /// Practice days per week (2 - 6)
        #[arg(long, default_value = "3")]
        days: u32,

        /// Goal: recreational, competitive, rating, youth
        #[arg(long)]
        goal: Option<String>,

        /// Youth player; excludes drills not suited to juniors
        #[arg(long)]
        youth: bool,

        /// Player age, shown in the overview for youth plans
        #[arg(long)]
        age: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List catalog drills
    Drills {
        /// Only drills for this skill area
        #[arg(long)]
        skill: Option<String>,

        /// Only drills suited to this rating
        #[arg(long)]
        rating: Option<f64>,

        /// Only youth-friendly drills
        #[arg(long)]
        youth: bool,
    },

    /// Show one drill by its exact name
    Drill {
        /// Drill name, e.g. "Wall Dink Practice"
        name: String,
    },

    /// Show accepted skill areas, goals, and session settings
    Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .with_service_name(service_names::PLANNER_CLI);
    logging.init()?;

    match cli.command {
        Command::Plan {
            rating,
            weaknesses,
            minutes,
            days,
            goal,
            youth,
            age,
            format,
        } => {
            debug!(rating, minutes, days, "Generating plan from CLI");
            commands::plan::run(
                commands::plan::PlanArgs {
                    rating,
                    weaknesses,
                    minutes,
                    days,
                    goal,
                    youth,
                    age,
                },
                format,
            )?;
        }
        Command::Drills {
            skill,
            rating,
            youth,
        } => commands::drills::list(skill.as_deref(), rating, youth)?,
        Command::Drill { name } => commands::drills::show(&name)?,
        Command::Options => commands::options::show(),
    }

    Ok(())
}
