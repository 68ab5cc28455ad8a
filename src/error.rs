//! # Tipos de Error
//! src/error.rs
//!
//! Errores del núcleo de planificación (`SchedulerError`) y de los
//! adaptadores de entrada/salida y CLI (`AppError`).

use crate::scheduler::QueueId;
use thiserror::Error;

/// Errores del núcleo: configuración inválida, valores fuera de rango
/// y agregación sobre un resultado vacío.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Un proceso pertenece a una cola sin algoritmo asignado
    #[error("process '{process}' belongs to queue {queue}, which has no scheduling policy")]
    UnassignedQueue { process: String, queue: QueueId },

    /// Burst time o arrival time negativos o demasiado grandes
    #[error("process '{process}': {field} must be in 0..=4294967295, got {value}")]
    InvalidProcessValue {
        process: String,
        field: &'static str,
        value: i64,
    },

    /// Quantum de Round Robin no positivo
    #[error("round robin quantum must be > 0, got {0}")]
    InvalidQuantum(i64),

    /// Dos procesos con la misma etiqueta en una misma corrida
    #[error("duplicate process id '{0}'")]
    DuplicateProcess(String),

    /// Promedios pedidos sobre cero procesos
    #[error("cannot compute averages over an empty result")]
    EmptyResult,

    /// Nombre de algoritmo desconocido
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),

    /// Esquema predefinido inexistente
    #[error("unknown scheme: {0} (expected 1, 2 or 3)")]
    UnknownScheme(String),

    /// Configuración de colas vacía
    #[error("multilevel queue needs at least one level")]
    NoQueues,
}

/// Errores de la aplicación (lectura, escritura, configuración)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Línea malformada en el archivo de entrada (1-based)
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
