//! # Colas Multinivel
//! src/mlq.rs
//!
//! Reparte los procesos por cola y ejecuta cada cola con su algoritmo, en
//! orden de prioridad (menor id primero). Una cola se vacía por completo
//! antes de considerar la siguiente; no hay expropiación entre colas.
//! El reloj arranca en 0 y se encadena de una cola a la siguiente.

use crate::error::{Result, SchedulerError};
use crate::process::Process;
use crate::scheduler::{QueueId, SchedulingPolicy, Tick, Timeline};
use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Resumen de la ejecución de una cola
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueRun {
    pub queue: QueueId,
    pub policy: String,
    pub processes: usize,
    /// Reloj al recibir la cola
    pub start: Tick,
    /// Reloj al vaciarla
    pub end: Tick,
}

/// Resultado completo de una corrida
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Procesos concatenados en el orden en que se vaciaron las colas
    pub completed: Vec<Process>,
    pub clock: Tick,
    pub timeline: Timeline,
    pub queues: Vec<QueueRun>,
}

/// Orquestador: mapeo `cola -> algoritmo`
#[derive(Debug, Default)]
pub struct MultilevelQueue {
    levels: BTreeMap<QueueId, Box<dyn SchedulingPolicy>>,
}

impl MultilevelQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asigna un algoritmo a una cola (builder)
    pub fn with_level(mut self, queue: QueueId, policy: impl SchedulingPolicy + 'static) -> Self {
        self.add_level(queue, Box::new(policy));
        self
    }

    /// Asigna un algoritmo a una cola, retornando el que hubiera antes
    pub fn add_level(
        &mut self,
        queue: QueueId,
        policy: Box<dyn SchedulingPolicy>,
    ) -> Option<Box<dyn SchedulingPolicy>> {
        self.levels.insert(queue, policy)
    }

    /// Colas configuradas en orden de prioridad
    pub fn levels(&self) -> impl Iterator<Item = (QueueId, &dyn SchedulingPolicy)> {
        self.levels.iter().map(|(queue, policy)| (*queue, policy.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Verifica la entrada antes de planificar
    ///
    /// Falla si algún proceso apunta a una cola sin algoritmo o si hay
    /// etiquetas repetidas.
    pub fn validate(&self, processes: &[Process]) -> Result<()> {
        let mut seen = HashSet::with_capacity(processes.len());

        for process in processes {
            if !self.levels.contains_key(&process.queue()) {
                return Err(SchedulerError::UnassignedQueue {
                    process: process.id().to_string(),
                    queue: process.queue(),
                });
            }
            if !seen.insert(process.id()) {
                return Err(SchedulerError::DuplicateProcess(process.id().to_string()));
            }
        }

        Ok(())
    }

    /// Ejecuta todas las colas y concatena los resultados
    pub fn run(&self, processes: Vec<Process>) -> Result<RunResult> {
        self.validate(&processes)?;

        // Una cubeta por cola configurada, aunque quede vacía
        let mut buckets: BTreeMap<QueueId, Vec<Process>> =
            self.levels.keys().map(|queue| (*queue, Vec::new())).collect();
        for process in processes {
            buckets.entry(process.queue()).or_default().push(process);
        }

        let mut result = RunResult::default();
        let mut clock: Tick = 0;

        for (queue, bucket) in buckets {
            if bucket.is_empty() {
                debug!("queue {} is empty, skipping", queue);
                continue;
            }

            let Some(policy) = self.levels.get(&queue) else {
                // validate() garantiza que toda cubeta tiene algoritmo
                continue;
            };

            let count = bucket.len();
            let start = clock;
            let schedule = policy.schedule(bucket, clock);
            clock = schedule.clock;

            info!(
                "queue {} ({}) drained {} processes, clock {} -> {}",
                queue,
                policy.name(),
                count,
                start,
                clock
            );

            result.completed.extend(schedule.completed);
            result.timeline.append(schedule.timeline);
            result.queues.push(QueueRun {
                queue,
                policy: policy.name(),
                processes: count,
                start,
                end: clock,
            });
        }

        result.clock = clock;
        Ok(result)
    }
}

impl fmt::Display for MultilevelQueue {
    /// `Q1=RR(1), Q2=RR(3), Q3=SJF`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .levels
            .iter()
            .map(|(queue, policy)| format!("Q{}={}", queue, policy.name()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Fcfs, PreemptiveSjf, RoundRobin, Sjf};

    fn proc(id: &str, burst: i64, arrival: i64, queue: QueueId) -> Process {
        Process::new(id, burst, arrival, queue, 1).unwrap()
    }

    fn three_levels() -> MultilevelQueue {
        MultilevelQueue::new()
            .with_level(1, RoundRobin::new(1).unwrap())
            .with_level(2, RoundRobin::new(3).unwrap())
            .with_level(3, Sjf)
    }

    // ==================== Ordering ====================

    #[test]
    fn test_lower_queue_drains_first() {
        let mlq = MultilevelQueue::new()
            .with_level(1, RoundRobin::new(1).unwrap())
            .with_level(2, Fcfs);

        let result = mlq
            .run(vec![proc("Q2P", 1, 0, 2), proc("Q1P", 2, 0, 1)])
            .unwrap();

        assert_eq!(result.clock, 3);
        assert_eq!(result.completed[0].id(), "Q1P");
        assert_eq!(result.completed[0].completion_time(), 2);
        assert_eq!(result.completed[1].id(), "Q2P");
        assert_eq!(result.completed[1].completion_time(), 3);
    }

    #[test]
    fn test_clock_threads_between_queues() {
        let result = three_levels()
            .run(vec![
                proc("A", 2, 0, 1),
                proc("B", 4, 0, 2),
                proc("C", 1, 0, 3),
            ])
            .unwrap();

        let spans: Vec<(QueueId, Tick, Tick)> =
            result.queues.iter().map(|q| (q.queue, q.start, q.end)).collect();
        assert_eq!(spans, vec![(1, 0, 2), (2, 2, 6), (3, 6, 7)]);
    }

    #[test]
    fn test_queue_ids_need_not_be_contiguous() {
        let mlq = MultilevelQueue::new()
            .with_level(10, Fcfs)
            .with_level(2, PreemptiveSjf);

        let result = mlq
            .run(vec![proc("late", 1, 0, 10), proc("early", 1, 0, 2)])
            .unwrap();
        let order: Vec<&str> = result.completed.iter().map(|p| p.id()).collect();
        assert_eq!(order, vec!["early", "late"]);
    }

    // ==================== Empty Queues ====================

    #[test]
    fn test_empty_queue_has_no_clock_effect() {
        let result = three_levels()
            .run(vec![proc("A", 2, 0, 1), proc("C", 3, 0, 3)])
            .unwrap();

        assert_eq!(result.clock, 5);
        assert_eq!(result.queues.len(), 2);
        assert_eq!(result.queues[1].queue, 3);
        assert_eq!(result.queues[1].start, 2);
    }

    #[test]
    fn test_empty_input() {
        let result = three_levels().run(Vec::new()).unwrap();
        assert!(result.completed.is_empty());
        assert_eq!(result.clock, 0);
        assert!(result.timeline.is_empty());
    }

    // ==================== Validation ====================

    #[test]
    fn test_unassigned_queue_fails_fast() {
        let err = three_levels()
            .run(vec![proc("A", 1, 0, 1), proc("X", 1, 0, 7)])
            .unwrap_err();
        assert_eq!(
            err,
            SchedulerError::UnassignedQueue {
                process: "X".to_string(),
                queue: 7,
            }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = three_levels()
            .run(vec![proc("A", 1, 0, 1), proc("A", 2, 0, 2)])
            .unwrap_err();
        assert_eq!(err, SchedulerError::DuplicateProcess("A".to_string()));
    }

    // ==================== Display ====================

    #[test]
    fn test_display_lists_levels() {
        assert_eq!(three_levels().to_string(), "Q1=RR(1), Q2=RR(3), Q3=SJF");
    }

    #[test]
    fn test_add_level_replaces() {
        let mut mlq = MultilevelQueue::new().with_level(1, Fcfs);
        let previous = mlq.add_level(1, Box::new(Sjf));
        assert_eq!(previous.map(|p| p.name()), Some("FCFS".to_string()));
        assert_eq!(mlq.len(), 1);
    }
}
