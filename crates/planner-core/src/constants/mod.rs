// ABOUTME: Application constants for profile limits and service identity
// ABOUTME: Single source for the accepted ratings, session lengths, and week sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accepted values for a player profile at the request boundary
pub mod profile_limits {
    /// Lowest accepted DUPR rating
    pub const MIN_RATING: f64 = 2.0;
    /// Highest accepted DUPR rating
    pub const MAX_RATING: f64 = 6.0;
    /// Session lengths offered to players, in minutes
    pub const SESSION_MINUTES: [u32; 4] = [30, 60, 90, 120];
    /// Practice days per week offered to players
    pub const DAYS_PER_WEEK: [u32; 5] = [2, 3, 4, 5, 6];
    /// Fewest weaknesses a request may select
    pub const MIN_WEAKNESSES: usize = 2;
}

/// Service names used in logs and health output
pub mod service_names {
    /// HTTP API server
    pub const PLANNER_SERVER: &str = "pickleball-planner-server";
    /// Command-line tool
    pub const PLANNER_CLI: &str = "pickleball-cli";
}
