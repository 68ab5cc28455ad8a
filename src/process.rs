//! # Proceso Simulado
//! src/process.rs
//!
//! Registro pasivo de un proceso: identidad, estado de simulación y las
//! métricas que calcula el algoritmo dueño de su cola.
//!
//! Las métricas cumplen siempre:
//! - `turnaround = completion - arrival`
//! - `waiting = turnaround - burst`

use crate::error::{Result, SchedulerError};
use crate::scheduler::{QueueId, Tick};
use serde::Serialize;
use std::fmt;

/// Mayor burst/arrival aceptado. Con este tope el reloj de una corrida no
/// puede desbordar `Tick` con menos de 2^32 procesos.
pub const MAX_TIME: Tick = u32::MAX as Tick;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Etiqueta del proceso (única dentro de una corrida)
    id: String,

    /// Tiempo total de CPU requerido
    burst_time: Tick,

    /// Tiempo restante; sólo avanza en los algoritmos expropiativos
    #[serde(skip)]
    remaining_time: Tick,

    /// Instante en que el proceso queda elegible
    arrival_time: Tick,

    /// Cola (banda de prioridad) a la que pertenece
    queue: QueueId,

    /// Prioridad informativa, no participa en ninguna decisión
    priority: i32,

    completion_time: Tick,
    waiting_time: Tick,
    turnaround_time: Tick,

    /// `None` hasta la primera vez que el proceso recibe CPU
    response_time: Option<Tick>,

    #[serde(skip)]
    finished: bool,
}

impl Process {
    /// Crea un proceso sin métricas calculadas
    ///
    /// Rechaza burst time y arrival time fuera de `0..=MAX_TIME`.
    pub fn new(
        id: impl Into<String>,
        burst_time: i64,
        arrival_time: i64,
        queue: QueueId,
        priority: i32,
    ) -> Result<Self> {
        let id = id.into();

        let burst_time = in_range(&id, "burst_time", burst_time)?;
        let arrival_time = in_range(&id, "arrival_time", arrival_time)?;

        Ok(Self {
            id,
            burst_time,
            remaining_time: burst_time,
            arrival_time,
            queue,
            priority,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
            finished: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    pub fn queue(&self) -> QueueId {
        self.queue
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn completion_time(&self) -> Tick {
        self.completion_time
    }

    pub fn waiting_time(&self) -> Tick {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> Tick {
        self.turnaround_time
    }

    pub fn response_time(&self) -> Option<Tick> {
        self.response_time
    }

    /// Verifica si el proceso ya tiene sus métricas finales
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Verifica si el proceso ya llegó en el instante `clock`
    pub fn has_arrived(&self, clock: Tick) -> bool {
        self.arrival_time <= clock
    }

    /// Registra el tiempo de respuesta la primera vez que recibe CPU.
    ///
    /// Retorna `true` si ésta fue la primera ejecución.
    pub(crate) fn mark_started(&mut self, clock: Tick) -> bool {
        if self.response_time.is_some() {
            return false;
        }
        debug_assert!(clock >= self.arrival_time, "process {} started before arrival", self.id);
        self.response_time = Some(clock.saturating_sub(self.arrival_time));
        true
    }

    /// Ejecuta hasta `units` unidades; retorna cuántas se consumieron
    pub(crate) fn run_for(&mut self, units: Tick) -> Tick {
        let ran = units.min(self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    /// Fija completion, turnaround y waiting al terminar en `clock`
    pub(crate) fn finalize(&mut self, clock: Tick) {
        debug_assert!(!self.finished, "process {} finalized twice", self.id);
        debug_assert!(
            clock >= self.arrival_time + self.burst_time,
            "process {} completed before it could run its burst",
            self.id
        );

        self.remaining_time = 0;
        self.completion_time = clock;
        self.turnaround_time = clock.saturating_sub(self.arrival_time);
        self.waiting_time = self.turnaround_time.saturating_sub(self.burst_time);
        self.finished = true;
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(BT={}, AT={}, Q={}, P={})",
            self.id, self.burst_time, self.arrival_time, self.queue, self.priority
        )
    }
}

fn in_range(id: &str, field: &'static str, value: i64) -> Result<Tick> {
    Tick::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_TIME)
        .ok_or_else(|| SchedulerError::InvalidProcessValue {
            process: id.to_string(),
            field,
            value,
        })
}
