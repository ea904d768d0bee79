/*!
 * Scheduler Module
 * Discrete-time simulation of CPU scheduling disciplines
 */

pub mod arrival;
pub mod npp;
pub mod orchestrator;
pub mod priority;
pub mod round_robin;
pub mod state;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use npp::NonPreemptivePriority;
pub use orchestrator::{run, simulate, ScheduleOutcome, Scheduler};
pub use round_robin::RoundRobin;
pub use state::{ReadyOrder, SimState};
pub use stats::SchedulerStats;
pub use traits::Discipline;
pub use types::{Algorithm, AlgorithmKind, Slice};
