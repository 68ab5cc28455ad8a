//! # Generador de Cargas de Trabajo
//! src/workload.rs
//!
//! Genera listas de procesos aleatorias pero reproducibles (semilla fija)
//! para probar los esquemas sin escribir archivos a mano.

use crate::error::{AppError, Result};
use crate::io::writer::render_input;
use crate::process::Process;
use crate::scheduler::{QueueId, Tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

const MAX_PRIORITY: i32 = 5;

/// Parámetros de generación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    pub count: usize,
    pub queues: QueueId,
    pub max_burst: Tick,
    pub max_arrival: Tick,
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 10,
            queues: 3,
            max_burst: 10,
            max_arrival: 20,
            seed: 0,
        }
    }
}

/// Genera `spec.count` procesos `P1..Pn`
///
/// Burst en `1..=max_burst`, llegada en `0..=max_arrival`, cola en
/// `1..=queues` y prioridad en `1..=5`.
pub fn generate(spec: &WorkloadSpec) -> Result<Vec<Process>> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let max_burst = spec.max_burst.max(1);
    let queues = spec.queues.max(1);

    (1..=spec.count)
        .map(|n| {
            let burst = rng.gen_range(1..=max_burst);
            let arrival = rng.gen_range(0..=spec.max_arrival);
            let queue = rng.gen_range(1..=queues);
            let priority = rng.gen_range(1..=MAX_PRIORITY);

            Process::new(
                format!("P{}", n),
                clamp_i64(burst),
                clamp_i64(arrival),
                queue,
                priority,
            )
        })
        .collect()
}

/// Genera y escribe la carga en el formato de entrada
pub fn write_workload(path: impl AsRef<Path>, spec: &WorkloadSpec) -> std::result::Result<usize, AppError> {
    let processes = generate(spec)?;
    fs::write(path.as_ref(), render_input(&processes))?;
    Ok(processes.len())
}

fn clamp_i64(value: Tick) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
