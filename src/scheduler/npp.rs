/*!
 * Non-Preemptive Priority
 * Runs each dispatched process to completion; the ready queue is re-sorted
 * by priority on every tick so the next pick reflects all arrivals
 */

use super::state::{ReadyOrder, SimState};
use super::traits::Discipline;
use super::types::Algorithm;
use crate::process::ProcessRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct NonPreemptivePriority;

impl Discipline for NonPreemptivePriority {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Npp
    }

    fn ready_order(&self) -> ReadyOrder {
        ReadyOrder::Priority
    }

    fn run(&self, state: &mut SimState, first: ProcessRecord) {
        let mut current = Some(first);

        while let Some(process) = current {
            // Arrivals during the burst only affect who runs next
            for _ in 0..process.burst {
                state.tick();
                state.check_arrivals();
            }

            state.complete(process);
            state.check_arrivals();
            current = state.next();
        }
    }
}
