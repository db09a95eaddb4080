//! Input handling, configuration, timing and error reporting

/// Command-line interface over a single puzzle input
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Reading puzzle input from disk
pub mod input;
/// Run-time measurement helpers
pub mod timing;
