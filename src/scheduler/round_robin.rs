//! # Round Robin
//! src/scheduler/round_robin.rs
//!
//! Cola FIFO ordenada una sola vez por llegada. En cada paso se toma el
//! primer proceso de la cola (en su orden actual) que ya llegó, se ejecuta
//! `min(restante, quantum)` y, si no terminó, vuelve al final de la cola.

use super::{next_arrival, Schedule, SchedulingPolicy, Tick, Timeline};
use crate::error::{Result, SchedulerError};
use crate::process::Process;
use log::debug;
use std::collections::VecDeque;
use std::num::NonZeroU64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// Crea un Round Robin; el quantum debe ser positivo
    pub fn new(quantum: i64) -> Result<Self> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(|quantum| Self { quantum })
            .ok_or(SchedulerError::InvalidQuantum(quantum))
    }

    pub fn quantum(&self) -> Tick {
        self.quantum.get()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> String {
        format!("RR({})", self.quantum)
    }

    fn schedule(&self, mut processes: Vec<Process>, mut clock: Tick) -> Schedule {
        // Orden estable: empates de llegada conservan el orden de entrada
        processes.sort_by_key(Process::arrival_time);

        let total = processes.len();
        let mut queue: VecDeque<Process> = processes.into();
        let mut completed = Vec::with_capacity(total);
        let mut timeline = Timeline::new();

        while completed.len() != total {
            let next = queue
                .iter()
                .position(|p| p.has_arrived(clock))
                .and_then(|pos| queue.remove(pos));

            let Some(mut process) = next else {
                match next_arrival(&queue) {
                    Some(arrival) => {
                        debug!("{} idle {}..{}", self.name(), clock, arrival);
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            // Respuesta relativa a la llegada, medida antes del tramo
            process.mark_started(clock);

            let start = clock;
            clock += process.run_for(self.quantum());
            timeline.record(&process, start, clock);

            if process.remaining_time() == 0 {
                process.finalize(clock);
                debug!("{} finished {} at {}", self.name(), process.id(), clock);
                completed.push(process);
            } else {
                debug!(
                    "{} preempted {} at {} ({} left)",
                    self.name(),
                    process.id(),
                    clock,
                    process.remaining_time()
                );
                queue.push_back(process);
            }
        }

        Schedule {
            completed,
            clock,
            timeline,
        }
    }
}
