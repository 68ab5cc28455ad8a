//! # Promedios de Tiempos
//! src/metrics/averages.rs

use crate::error::{Result, SchedulerError};
use crate::process::Process;
use serde::Serialize;

/// Media aritmética de las cuatro métricas por proceso
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub waiting_time: f64,
    pub completion_time: f64,
    pub response_time: f64,
    pub turnaround_time: f64,
}

/// Calcula los promedios sobre los procesos completados
///
/// Una lista vacía es un error explícito (`EmptyResult`), nunca NaN.
pub fn compute_averages(processes: &[Process]) -> Result<Averages> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyResult);
    }

    // Suma en u128: n tiempos de hasta 64 bits no desbordan
    let n = processes.len() as f64;
    let mean = |metric: fn(&Process) -> u64| -> f64 {
        processes.iter().map(|p| u128::from(metric(p))).sum::<u128>() as f64 / n
    };

    Ok(Averages {
        waiting_time: mean(Process::waiting_time),
        completion_time: mean(Process::completion_time),
        // Todo proceso completado tiene respuesta registrada
        response_time: mean(|p| p.response_time().unwrap_or_default()),
        turnaround_time: mean(Process::turnaround_time),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Fcfs, SchedulingPolicy};

    fn finished(processes: Vec<Process>) -> Vec<Process> {
        Fcfs.schedule(processes, 0).completed
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(compute_averages(&[]), Err(SchedulerError::EmptyResult));
    }

    #[test]
    fn test_fcfs_scenario_averages() {
        let done = finished(vec![
            Process::new("A", 5, 0, 1, 1).unwrap(),
            Process::new("B", 3, 1, 1, 1).unwrap(),
        ]);
        let avg = compute_averages(&done).unwrap();

        assert_eq!(avg.waiting_time, 2.0);
        assert_eq!(avg.completion_time, 6.5);
        assert_eq!(avg.response_time, 2.0);
        assert_eq!(avg.turnaround_time, 6.0);
    }

    #[test]
    fn test_single_process() {
        let done = finished(vec![Process::new("A", 4, 2, 1, 1).unwrap()]);
        let avg = compute_averages(&done).unwrap();
        assert_eq!(avg.completion_time, 6.0);
        assert_eq!(avg.waiting_time, 0.0);
        assert!(!avg.turnaround_time.is_nan());
    }

    #[test]
    fn test_fractional_mean() {
        let done = finished(vec![
            Process::new("A", 1, 0, 1, 1).unwrap(),
            Process::new("B", 1, 0, 1, 1).unwrap(),
            Process::new("C", 1, 0, 1, 1).unwrap(),
        ]);
        let avg = compute_averages(&done).unwrap();
        // completion: 1, 2, 3
        assert_eq!(avg.completion_time, 2.0);
        // waiting: 0, 1, 2 -> 1.0
        assert_eq!(avg.waiting_time, 1.0);
    }

    #[test]
    fn test_largest_times_do_not_overflow() {
        use crate::process::MAX_TIME;
        use crate::scheduler::RoundRobin;

        let max = MAX_TIME as i64;
        let done = RoundRobin::new(1).unwrap().schedule(
            vec![
                Process::new("A", 1, max, 1, 1).unwrap(),
                Process::new("B", 1, max, 1, 1).unwrap(),
                Process::new("C", 1, max, 1, 1).unwrap(),
            ],
            0,
        );
        let avg = compute_averages(&done.completed).unwrap();

        assert_eq!(avg.completion_time, MAX_TIME as f64 + 2.0);
        assert_eq!(avg.waiting_time, 1.0);
    }
}
