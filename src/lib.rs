/*!
 * CPU Scheduling Simulator Library
 * Discrete-time simulation of non-preemptive priority and round robin
 * scheduling over a fixed set of processes
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod runner;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use config::{Cli, SimulationConfig};
pub use core::errors::{ConfigError, SimError, WorkloadError};
pub use core::types::{Pid, Priority, SimResult, Ticks};
pub use monitoring::init_tracing;
pub use process::{ProcessQueue, ProcessRecord};
pub use runner::{execute, RunReport};
pub use scheduler::{
    Algorithm, AlgorithmKind, ScheduleOutcome, Scheduler, SchedulerStats, Slice,
};
pub use workload::Summary;
