// ABOUTME: Command modules for pickleball-cli
// ABOUTME: Plan generation, drill listing, and option display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod drills;
pub mod options;
pub mod plan;
