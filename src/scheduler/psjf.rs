//! # SJF Expropiativo (Shortest Remaining Time First)
//! src/scheduler/psjf.rs
//!
//! Se reevalúa el mínimo en cada unidad de tiempo, de modo que un proceso
//! más corto que llega expropia al que está corriendo en el siguiente
//! borde de unidad. No se ejecuta por lotes.

use super::{next_arrival, Schedule, SchedulingPolicy, Tick, Timeline};
use crate::process::Process;
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptiveSjf;

impl SchedulingPolicy for PreemptiveSjf {
    fn name(&self) -> String {
        "PSJF".to_string()
    }

    fn schedule(&self, mut pending: Vec<Process>, mut clock: Tick) -> Schedule {
        pending.sort_by(|a, b| {
            a.arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| a.id().cmp(b.id()))
        });

        let mut completed = Vec::with_capacity(pending.len());
        let mut timeline = Timeline::new();

        while !pending.is_empty() {
            let chosen = pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.has_arrived(clock))
                .min_by(|(_, a), (_, b)| {
                    a.remaining_time()
                        .cmp(&b.remaining_time())
                        .then_with(|| a.id().cmp(b.id()))
                })
                .map(|(idx, _)| idx);

            let Some(idx) = chosen else {
                if let Some(arrival) = next_arrival(&pending) {
                    debug!("PSJF idle {}..{}", clock, arrival);
                    clock = arrival;
                }
                continue;
            };

            let process = &mut pending[idx];
            if process.mark_started(clock) {
                debug!("PSJF first run of {} at {}", process.id(), clock);
            }

            // Una sola unidad por decisión
            if process.remaining_time() > 0 {
                let start = clock;
                clock += process.run_for(1);
                timeline.record(process, start, clock);
            }

            if process.remaining_time() == 0 {
                let mut done = pending.remove(idx);
                done.finalize(clock);
                debug!("PSJF finished {} at {}", done.id(), clock);
                completed.push(done);
            }
        }

        Schedule {
            completed,
            clock,
            timeline,
        }
    }
}
