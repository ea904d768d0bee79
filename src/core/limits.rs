/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the fixed values of the record format and
 * logging setup.
 */

// =============================================================================
// RECORD FORMAT
// =============================================================================

/// Integers per input record: pid, arrival, burst, priority
pub const INPUT_RECORD_FIELDS: usize = 4;

/// Largest accepted arrival or burst (the range of a C `int`)
///
/// Keeps every clock value a run can reach well inside `Ticks`.
pub const MAX_RECORD_TICKS: u64 = i32::MAX as u64;

// =============================================================================
// LOGGING
// =============================================================================

/// Filter used when RUST_LOG is unset; keeps the console to the summary line
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable that switches trace output to JSON
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";
