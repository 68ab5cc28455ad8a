//! # Línea de Tiempo de Ejecución
//! src/scheduler/timeline.rs
//!
//! Registra los tramos en que cada proceso tuvo la CPU. Tramos contiguos
//! del mismo proceso se fusionan, así la ejecución unidad a unidad del
//! SJF expropiativo queda como un solo tramo por ráfaga.

use crate::process::Process;
use crate::scheduler::{QueueId, Tick};
use serde::Serialize;

/// Intervalo `[start, end)` en que `process` tuvo la CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub process: String,
    pub queue: QueueId,
    pub start: Tick,
    pub end: Tick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un tramo; los de largo cero no se registran
    pub fn record(&mut self, process: &Process, start: Tick, end: Tick) {
        debug_assert!(start <= end);
        if start == end {
            return;
        }

        if let Some(last) = self.slices.last_mut() {
            if last.process == process.id() && last.end == start {
                last.end = end;
                return;
            }
        }

        self.slices.push(Slice {
            process: process.id().to_string(),
            queue: process.queue(),
            start,
            end,
        });
    }

    /// Concatena otra línea de tiempo posterior a ésta
    pub fn append(&mut self, other: Timeline) {
        self.slices.extend(other.slices);
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Tramos de un proceso en orden cronológico
    pub fn for_process<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Slice> + 'a {
        self.slices.iter().filter(move |s| s.process == id)
    }

    /// Tiempo total con la CPU ocupada
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(|s| s.end - s.start).sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
