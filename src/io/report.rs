//! # Reporte JSON
//! src/io/report.rs
//!
//! Vuelca una corrida completa (procesos, métricas, colas y línea de
//! tiempo) a JSON.

use super::write_atomic;
use crate::error::AppError;
use crate::metrics::RunMetrics;
use crate::mlq::{QueueRun, RunResult};
use crate::process::Process;
use crate::scheduler::Timeline;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Descripción de las colas, p.ej. `Q1=RR(1), Q2=RR(3), Q3=SJF`
    pub scheme: String,
    pub processes: &'a [Process],
    pub metrics: &'a RunMetrics,
    pub queues: &'a [QueueRun],
    pub timeline: &'a Timeline,
}

impl<'a> Report<'a> {
    pub fn new(scheme: impl Into<String>, run: &'a RunResult, metrics: &'a RunMetrics) -> Self {
        Self {
            scheme: scheme.into(),
            processes: &run.completed,
            metrics,
            queues: &run.queues,
            timeline: &run.timeline,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Guarda el reporte en `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        write_atomic(path.as_ref(), |w| {
            serde_json::to_writer_pretty(&mut *w, self)?;
            Ok(())
        })
    }
}
