//! Runtime configuration defaults

// Timing
/// Number of times the input is loaded when no `--runs` value is given
pub const DEFAULT_TIMING_RUNS: usize = 1;
/// Upper limit on repeated runs for averaged timing
pub const MAX_TIMING_RUNS: usize = 10_000;

// Logging
/// Environment variable holding the `tracing` filter directives
pub const LOG_ENV_VAR: &str = "PUZZLEGRID_LOG";
/// Filter applied when the environment variable is unset or invalid
pub const DEFAULT_LOG_DIRECTIVE: &str = "puzzlegrid=info";

// Command-line parsing
/// Separator between the two components of a position argument (`X,Y`)
pub const COORDINATE_SEPARATOR: char = ',';
