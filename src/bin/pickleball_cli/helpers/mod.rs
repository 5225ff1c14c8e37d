// ABOUTME: Helper modules for pickleball-cli
// ABOUTME: Terminal output formatting

pub mod display;
