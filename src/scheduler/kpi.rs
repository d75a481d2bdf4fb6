//! Schedule quality metrics (KPIs).
//!
//! Computes CPU-level performance indicators from a completed
//! simulation result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Completion time of the last process |
//! | Busy Time | Sum of Gantt segment lengths |
//! | Idle Time | Makespan - busy time |
//! | CPU Utilization | Busy time / makespan × 100 |
//! | Throughput | Processes completed per time unit |
//! | Context Switches | Adjacent segments of different processes |
//! | Burst Share | Per-process fraction of total burst |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::HashMap;

use crate::models::SchedulingResult;

/// CPU performance indicators.
///
/// All time values are logical ticks.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Completion time of the last process.
    pub makespan: i64,
    /// Time spent executing processes.
    pub busy_time: i64,
    /// Time within the makespan with no process running.
    pub idle_time: i64,
    /// Busy percentage of the makespan (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Longest response time of any single process.
    pub max_response_time: i64,
    /// Number of dispatches that switch to a different process.
    pub context_switches: usize,
    /// Per-process fraction of total burst time (process id → 0.0..1.0).
    pub burst_share: HashMap<u32, f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let makespan = result.total_time;
        let busy_time = result.busy_time();
        let idle_time = (makespan - busy_time).max(0);

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64 * 100.0
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            result.process_count() as f64 / makespan as f64
        };

        let max_waiting_time = result
            .processes
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);
        let max_response_time = result
            .processes
            .iter()
            .map(|r| r.response_time)
            .max()
            .unwrap_or(0);

        let context_switches = result
            .gantt_chart
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        let total_burst: i64 = result.processes.iter().map(|r| r.process.burst_time).sum();
        let burst_share = if total_burst <= 0 {
            HashMap::new()
        } else {
            result
                .processes
                .iter()
                .map(|r| {
                    (
                        r.process.id,
                        r.process.burst_time as f64 / total_burst as f64,
                    )
                })
                .collect()
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            max_waiting_time,
            max_response_time,
            context_switches,
            burst_share,
        }
    }

    /// Whether the result meets the given quality thresholds.
    pub fn meets_thresholds(
        &self,
        result: &SchedulingResult,
        max_average_waiting: f64,
        min_utilization: f64,
    ) -> bool {
        result.average_waiting_time <= max_average_waiting
            && self.cpu_utilization >= min_utilization
    }
}
