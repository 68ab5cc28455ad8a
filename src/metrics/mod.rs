//! # Sistema de Métricas
//! src/metrics/mod.rs
//!
//! Reduce las métricas por proceso de una corrida:
//! - Promedios de waiting, completion, response y turnaround
//! - Promedios por cola
//! - Makespan, tiempo ocioso, utilización de CPU y throughput

pub mod averages;
pub mod collector;

pub use averages::{compute_averages, Averages};
pub use collector::{QueueMetrics, RunMetrics};
