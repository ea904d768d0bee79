/*!
 * Process Module
 * Process records and the queues that own them
 */

pub mod queue;
pub mod types;

pub use queue::ProcessQueue;
pub use types::ProcessRecord;
