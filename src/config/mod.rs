// ABOUTME: Configuration module for the planner server
// ABOUTME: Environment-driven settings for binding, logging level, CORS, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the pickleball planner server

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ServerConfig};
