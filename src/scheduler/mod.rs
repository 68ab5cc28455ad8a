//! # Algoritmos de Planificación
//! src/scheduler/mod.rs
//!
//! Cada algoritmo recibe los procesos de una cola y el reloj actual, y
//! devuelve los procesos en orden de finalización junto con el reloj
//! después de vaciar la cola:
//!
//! - `fcfs`: First-Come First-Served (no expropiativo)
//! - `sjf`: Shortest Job First (no expropiativo)
//! - `psjf`: SJF expropiativo / Shortest Remaining Time First
//! - `round_robin`: Round Robin con quantum fijo
//!
//! La simulación es secuencial: el reloj se pasa por valor entre etapas.

pub mod fcfs;
pub mod psjf;
pub mod round_robin;
pub mod sjf;
pub mod timeline;

pub use fcfs::Fcfs;
pub use psjf::PreemptiveSjf;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use timeline::{Slice, Timeline};

use crate::process::Process;
use std::fmt;

/// Unidad de tiempo de la simulación
pub type Tick = u64;

/// Identificador de cola; menor id = mayor prioridad
pub type QueueId = u32;

/// Resultado de planificar una cola
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    /// Procesos en orden de finalización
    pub completed: Vec<Process>,

    /// Reloj al terminar la cola
    pub clock: Tick,

    /// Tramos de ejecución en orden cronológico
    pub timeline: Timeline,
}

impl Schedule {
    pub fn into_parts(self) -> (Vec<Process>, Tick) {
        (self.completed, self.clock)
    }
}

/// Capacidad común de los cuatro algoritmos
pub trait SchedulingPolicy: fmt::Debug {
    /// Nombre corto para reportes, p.ej. `RR(2)`
    fn name(&self) -> String;

    /// Planifica todos los procesos de una cola a partir de `clock`
    fn schedule(&self, processes: Vec<Process>, clock: Tick) -> Schedule;
}

/// Próxima llegada entre los procesos pendientes.
///
/// Cuando ningún proceso es elegible el reloj salta hasta aquí; es
/// equivalente a avanzar de a una unidad ociosa.
fn next_arrival<'a>(pending: impl IntoIterator<Item = &'a Process>) -> Option<Tick> {
    pending.into_iter().map(Process::arrival_time).min()
}
