//! Side-by-side comparison of the scheduling policies.
//!
//! Runs every policy on the same process set and ranks them per metric.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Algorithm, ScheduleKpi};
use crate::error::SimulationError;
use crate::models::{Process, SchedulingResult};

/// Metric used to rank policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// `SchedulingResult::average_waiting_time` (lower is better).
    AverageWaiting,
    /// `SchedulingResult::average_turnaround_time` (lower is better).
    AverageTurnaround,
    /// `SchedulingResult::average_response_time` (lower is better).
    AverageResponse,
    /// `ScheduleKpi::cpu_utilization` (higher is better).
    CpuUtilization,
}

impl Metric {
    /// Whether smaller values are better.
    pub fn lower_is_better(&self) -> bool {
        !matches!(self, Metric::CpuUtilization)
    }

    fn value(&self, entry: &ComparisonEntry) -> f64 {
        match self {
            Metric::AverageWaiting => entry.result.average_waiting_time,
            Metric::AverageTurnaround => entry.result.average_turnaround_time,
            Metric::AverageResponse => entry.result.average_response_time,
            Metric::CpuUtilization => entry.kpi.cpu_utilization,
        }
    }
}

/// One policy's outcome within a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// Policy that produced this entry.
    pub algorithm: Algorithm,
    /// Raw simulation output.
    pub result: SchedulingResult,
    /// KPIs derived from `result`.
    pub kpi: ScheduleKpi,
}

impl ComparisonEntry {
    /// Value of `metric` for this entry.
    pub fn metric(&self, metric: Metric) -> f64 {
        metric.value(self)
    }
}

/// Results of running several policies over the same input.
#[derive(Debug, Clone)]
pub struct AlgorithmComparison {
    entries: Vec<ComparisonEntry>,
}

impl AlgorithmComparison {
    /// Runs FIFO, Round-Robin (with `quantum`) and SJF, in that order.
    ///
    /// # Example
    /// ```
    /// use u_procsched::models::Process;
    /// use u_procsched::scheduler::{AlgorithmComparison, Algorithm, Metric};
    ///
    /// let processes = vec![
    ///     Process::new(1, 0, 8),
    ///     Process::new(2, 0, 4),
    ///     Process::new(3, 0, 2),
    /// ];
    /// let cmp = AlgorithmComparison::run(&processes, 2).unwrap();
    /// assert_eq!(cmp.best_by(Metric::AverageWaiting).unwrap().algorithm, Algorithm::Sjf);
    /// ```
    pub fn run(processes: &[Process], quantum: i64) -> Result<Self, SimulationError> {
        Self::run_with(
            processes,
            &[
                Algorithm::Fifo,
                Algorithm::RoundRobin { quantum },
                Algorithm::Sjf,
            ],
        )
    }

    /// Runs the given policies, in order. Fails on the first rejected run.
    #[instrument(skip(processes), fields(count = processes.len()))]
    pub fn run_with(processes: &[Process], algorithms: &[Algorithm]) -> Result<Self, SimulationError> {
        let mut entries = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            let result = algorithm.run(processes)?;
            let kpi = ScheduleKpi::calculate(&result);
            debug!(
                algorithm = algorithm.short_name(),
                avg_waiting = result.average_waiting_time,
                utilization = kpi.cpu_utilization,
                "compared"
            );
            entries.push(ComparisonEntry {
                algorithm,
                result,
                kpi,
            });
        }
        Ok(Self { entries })
    }

    /// All entries in run order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Best entry for `metric`. The earliest entry wins a tie.
    pub fn best_by(&self, metric: Metric) -> Option<&ComparisonEntry> {
        self.pick(metric, metric.lower_is_better())
    }

    /// Worst entry for `metric`. The earliest entry wins a tie.
    pub fn worst_by(&self, metric: Metric) -> Option<&ComparisonEntry> {
        self.pick(metric, !metric.lower_is_better())
    }

    fn pick(&self, metric: Metric, prefer_lower: bool) -> Option<&ComparisonEntry> {
        let mut best: Option<&ComparisonEntry> = None;
        for entry in &self.entries {
            let replace = match best {
                None => true,
                Some(current) => {
                    let (v, c) = (entry.metric(metric), current.metric(metric));
                    if prefer_lower {
                        v < c
                    } else {
                        v > c
                    }
                }
            };
            if replace {
                best = Some(entry);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8),
            Process::new(2, 0, 4),
            Process::new(3, 0, 2),
        ]
    }

    #[test]
    fn test_runs_all_three() {
        let cmp = AlgorithmComparison::run(&sample(), 2).unwrap();
        let names: Vec<&str> = cmp
            .entries()
            .iter()
            .map(|e| e.algorithm.short_name())
            .collect();
        assert_eq!(names, vec!["FIFO", "RR", "SJF"]);
    }

    #[test]
    fn test_best_and_worst() {
        let cmp = AlgorithmComparison::run(&sample(), 2).unwrap();
        // FIFO waits: 0, 8, 12; RR: 6, 6, 4; SJF: 6, 2, 0
        let best = cmp.best_by(Metric::AverageWaiting).unwrap();
        assert_eq!(best.algorithm, Algorithm::Sjf);
        assert!((best.metric(Metric::AverageWaiting) - 8.0 / 3.0).abs() < 1e-10);

        // Round-Robin dispatches everyone sooner
        let responsive = cmp.best_by(Metric::AverageResponse).unwrap();
        assert_eq!(responsive.algorithm, Algorithm::RoundRobin { quantum: 2 });

        let slowest = cmp.worst_by(Metric::AverageResponse).unwrap();
        assert_eq!(slowest.algorithm, Algorithm::Fifo);
    }

    #[test]
    fn test_utilization_tie_keeps_first() {
        // No idle time anywhere → every policy at 100%
        let cmp = AlgorithmComparison::run(&sample(), 2).unwrap();
        assert!(!Metric::CpuUtilization.lower_is_better());
        assert_eq!(
            cmp.best_by(Metric::CpuUtilization).unwrap().algorithm,
            Algorithm::Fifo
        );
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let err = AlgorithmComparison::run(&sample(), 0).unwrap_err();
        assert_eq!(err, SimulationError::InvalidQuantum(0));
    }

    #[test]
    fn test_empty_selection() {
        let cmp = AlgorithmComparison::run_with(&sample(), &[]).unwrap();
        assert!(cmp.entries().is_empty());
        assert!(cmp.best_by(Metric::AverageTurnaround).is_none());
    }
}
