/*!
 * Scheduler Traits
 * Interface implemented by each scheduling discipline
 */

use super::state::{ReadyOrder, SimState};
use super::types::Algorithm;
use crate::process::ProcessRecord;

/// A scheduling discipline drives the simulation loop
///
/// The orchestrator hands it the first dispatched process; the discipline
/// runs it and everything after it until `SimState::next` is exhausted.
pub trait Discipline {
    fn algorithm(&self) -> Algorithm;

    /// How the ready queue is kept between dispatches
    fn ready_order(&self) -> ReadyOrder;

    fn run(&self, state: &mut SimState, first: ProcessRecord);
}
