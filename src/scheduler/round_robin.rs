/*!
 * Round Robin
 * Fixed-quantum time slicing over a FIFO ready queue
 */

use super::state::{ReadyOrder, SimState};
use super::traits::Discipline;
use super::types::Algorithm;
use crate::process::ProcessRecord;
use std::num::NonZeroU64;

#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }
}

impl Discipline for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn ready_order(&self) -> ReadyOrder {
        ReadyOrder::Fifo
    }

    fn run(&self, state: &mut SimState, first: ProcessRecord) {
        let quantum = self.quantum.get();
        let mut current = Some(first);

        while let Some(mut process) = current {
            let mut used = 0;
            while used < quantum && process.remaining > 0 {
                used += 1;
                state.tick();
                process.remaining -= 1;

                // Arrivals on the expiry tick are admitted after the requeue below
                if used < quantum {
                    state.check_arrivals();
                }
            }

            if process.remaining == 0 {
                state.complete(process);
            } else {
                state.requeue(process);
            }

            state.check_arrivals();
            current = state.next();
        }
    }
}
