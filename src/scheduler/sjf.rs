//! # Shortest Job First (no expropiativo)
//! src/scheduler/sjf.rs

use super::{next_arrival, Schedule, SchedulingPolicy, Tick, Timeline};
use crate::process::Process;
use log::debug;

/// Entre los procesos que ya llegaron elige el de menor (burst, id) y lo
/// ejecuta completo. Un trabajo más corto que llega a mitad de una ráfaga
/// espera a que ésta termine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> String {
        "SJF".to_string()
    }

    fn schedule(&self, mut pending: Vec<Process>, mut clock: Tick) -> Schedule {
        let mut completed = Vec::with_capacity(pending.len());
        let mut timeline = Timeline::new();

        while !pending.is_empty() {
            let chosen = pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.has_arrived(clock))
                .min_by(|(_, a), (_, b)| {
                    a.burst_time()
                        .cmp(&b.burst_time())
                        .then_with(|| a.id().cmp(b.id()))
                })
                .map(|(idx, _)| idx);

            let Some(idx) = chosen else {
                // Nadie llegó todavía
                if let Some(arrival) = next_arrival(&pending) {
                    debug!("SJF idle {}..{}", clock, arrival);
                    clock = arrival;
                }
                continue;
            };

            let mut process = pending.remove(idx);
            let start = clock;
            process.mark_started(start);
            clock += process.run_for(process.burst_time());
            process.finalize(clock);
            timeline.record(&process, start, clock);

            debug!("SJF ran {} {}..{}", process.id(), start, clock);
            completed.push(process);
        }

        Schedule {
            completed,
            clock,
            timeline,
        }
    }
}
