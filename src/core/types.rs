/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Logical clock value in milliseconds since the start of the run
pub type Ticks = u64;

/// Priority level (lower value is scheduled earlier)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
