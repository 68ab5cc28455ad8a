//! # First-Come First-Served
//! src/scheduler/fcfs.rs

use super::{Schedule, SchedulingPolicy, Tick, Timeline};
use crate::process::Process;
use log::debug;

/// FCFS no expropiativo: orden por (llegada, id), cada proceso corre
/// completo una vez que empieza.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> String {
        "FCFS".to_string()
    }

    fn schedule(&self, mut processes: Vec<Process>, mut clock: Tick) -> Schedule {
        processes.sort_by(|a, b| {
            a.arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| a.id().cmp(b.id()))
        });

        let mut timeline = Timeline::new();

        for process in processes.iter_mut() {
            // Hueco ocioso: esperar a que el proceso llegue
            if clock < process.arrival_time() {
                debug!("FCFS idle {}..{}", clock, process.arrival_time());
                clock = process.arrival_time();
            }

            let start = clock;
            process.mark_started(start);
            clock += process.run_for(process.burst_time());
            process.finalize(clock);
            timeline.record(process, start, clock);

            debug!("FCFS ran {} {}..{}", process.id(), start, clock);
        }

        Schedule {
            completed: processes,
            clock,
            timeline,
        }
    }
}
