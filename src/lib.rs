//! # MLQ Scheduler
//! src/lib.rs
//!
//! Simulador de planificación de CPU con colas multinivel para demostrar
//! conceptos de sistemas operativos: algoritmos de planificación,
//! expropiación y métricas de rendimiento.
//!
//! ## Arquitectura
//!
//! El simulador está dividido en módulos especializados:
//! - `process`: Registro de un proceso y sus métricas
//! - `scheduler`: Algoritmos FCFS, SJF, SJF expropiativo y Round Robin
//! - `mlq`: Orquestador de colas multinivel
//! - `metrics`: Promedios y métricas de la corrida
//! - `scheme`: Esquemas predefinidos y configuraciones personalizadas
//! - `io`: Lectura de procesos y escritura de resultados
//! - `workload`: Generador de cargas aleatorias
//! - `config`: Argumentos CLI
//!
//! ## Ejemplo de uso
//!
//! ```rust
//! use mlq_scheduler::{compute_averages, MultilevelQueue, Process};
//! use mlq_scheduler::scheduler::{Fcfs, RoundRobin};
//!
//! let mlq = MultilevelQueue::new()
//!     .with_level(1, RoundRobin::new(1).unwrap())
//!     .with_level(2, Fcfs);
//!
//! let run = mlq
//!     .run(vec![
//!         Process::new("A", 2, 0, 1, 1).unwrap(),
//!         Process::new("B", 1, 0, 2, 1).unwrap(),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(run.completed[1].completion_time(), 3);
//! let averages = compute_averages(&run.completed).unwrap();
//! assert_eq!(averages.completion_time, 2.5);
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod metrics;
pub mod mlq;
pub mod process;
pub mod scheduler;
pub mod scheme;
pub mod workload;

pub use error::{AppError, SchedulerError};
pub use metrics::{compute_averages, Averages, RunMetrics};
pub use mlq::{MultilevelQueue, RunResult};
pub use process::Process;
pub use scheduler::{SchedulingPolicy, Tick};
pub use scheme::Scheme;
