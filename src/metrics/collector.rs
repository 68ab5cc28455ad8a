//! # Collector de Métricas
//! src/metrics/collector.rs
//!
//! Agrega las métricas de una corrida completa del orquestador.

use crate::error::Result;
use crate::metrics::averages::{compute_averages, Averages};
use crate::mlq::RunResult;
use crate::process::Process;
use crate::scheduler::{QueueId, Tick};
use serde::Serialize;
use std::collections::BTreeMap;

/// Métricas de una cola
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueMetrics {
    pub policy: String,
    pub processes: usize,
    pub averages: Averages,
}

/// Métricas de la corrida completa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetrics {
    pub averages: Averages,

    /// Promedios por cola, en orden de prioridad
    pub per_queue: BTreeMap<QueueId, QueueMetrics>,

    /// Reloj final de la simulación
    pub makespan: Tick,

    /// Tiempo con la CPU ocupada
    pub busy_time: Tick,

    /// Tiempo con la CPU ociosa
    pub idle_time: Tick,

    /// busy / makespan (0 si el makespan es 0)
    pub cpu_utilization: f64,

    /// Procesos completados por unidad de tiempo
    pub throughput: f64,

    /// Desviación estándar del waiting time
    pub waiting_stddev: f64,

    /// Mayor waiting time observado
    pub max_waiting_time: Tick,
}

impl RunMetrics {
    /// Calcula las métricas de una corrida
    ///
    /// Falla con `EmptyResult` si no se completó ningún proceso.
    pub fn collect(run: &RunResult) -> Result<Self> {
        let averages = compute_averages(&run.completed)?;

        let mut per_queue = BTreeMap::new();
        for queue_run in &run.queues {
            let members: Vec<Process> = run
                .completed
                .iter()
                .filter(|p| p.queue() == queue_run.queue)
                .cloned()
                .collect();

            per_queue.insert(
                queue_run.queue,
                QueueMetrics {
                    policy: queue_run.policy.clone(),
                    processes: members.len(),
                    averages: compute_averages(&members)?,
                },
            );
        }

        let makespan = run.clock;
        let busy_time = run.timeline.busy_time();
        let idle_time = makespan.saturating_sub(busy_time);

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                run.completed.len() as f64 / makespan as f64,
            )
        };

        let waits: Vec<Tick> = run.completed.iter().map(Process::waiting_time).collect();

        Ok(Self {
            averages,
            per_queue,
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            waiting_stddev: stddev(&waits, averages.waiting_time),
            max_waiting_time: waits.iter().copied().max().unwrap_or(0),
        })
    }
}

/// Desviación estándar poblacional
fn stddev(values: &[Tick], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let variance: f64 = values
        .iter()
        .map(|&x| {
            let diff = x as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulerError;
    use crate::mlq::MultilevelQueue;
    use crate::scheduler::{Fcfs, RoundRobin};

    fn proc(id: &str, burst: i64, arrival: i64, queue: QueueId) -> Process {
        Process::new(id, burst, arrival, queue, 1).unwrap()
    }

    fn two_levels() -> MultilevelQueue {
        MultilevelQueue::new()
            .with_level(1, RoundRobin::new(1).unwrap())
            .with_level(2, Fcfs)
    }

    #[test]
    fn test_collect_two_queues() {
        let run = two_levels()
            .run(vec![proc("A", 2, 0, 1), proc("B", 1, 0, 2)])
            .unwrap();
        let metrics = RunMetrics::collect(&run).unwrap();

        assert_eq!(metrics.makespan, 3);
        assert_eq!(metrics.busy_time, 3);
        assert_eq!(metrics.idle_time, 0);
        assert_eq!(metrics.cpu_utilization, 1.0);
        assert_eq!(metrics.throughput, 2.0 / 3.0);

        assert_eq!(metrics.per_queue.len(), 2);
        assert_eq!(metrics.per_queue[&1].policy, "RR(1)");
        assert_eq!(metrics.per_queue[&2].averages.completion_time, 3.0);
        assert_eq!(metrics.per_queue[&2].averages.waiting_time, 2.0);
    }

    #[test]
    fn test_idle_time_counted() {
        let run = two_levels().run(vec![proc("A", 2, 4, 1)]).unwrap();
        let metrics = RunMetrics::collect(&run).unwrap();

        assert_eq!(metrics.makespan, 6);
        assert_eq!(metrics.busy_time, 2);
        assert_eq!(metrics.idle_time, 4);
        assert!((metrics.cpu_utilization - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_waiting_spread() {
        let run = two_levels()
            .run(vec![proc("A", 2, 0, 2), proc("B", 2, 0, 2)])
            .unwrap();
        let metrics = RunMetrics::collect(&run).unwrap();

        // waits: 0 y 2
        assert_eq!(metrics.max_waiting_time, 2);
        assert!((metrics.waiting_stddev - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_makespan() {
        let run = two_levels().run(vec![proc("A", 0, 0, 2)]).unwrap();
        let metrics = RunMetrics::collect(&run).unwrap();
        assert_eq!(metrics.makespan, 0);
        assert_eq!(metrics.cpu_utilization, 0.0);
        assert_eq!(metrics.throughput, 0.0);
    }

    #[test]
    fn test_empty_run_is_error() {
        let run = two_levels().run(Vec::new()).unwrap();
        assert_eq!(RunMetrics::collect(&run), Err(SchedulerError::EmptyResult));
    }

    #[test]
    fn test_stddev_empty() {
        assert_eq!(stddev(&[], 0.0), 0.0);
    }
}
