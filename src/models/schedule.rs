//! Simulation output model.
//!
//! A scheduling result is the Gantt timeline of executed slices plus
//! per-process timing summaries and their averages.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::Process;

/// One executed slice of the timeline (a Gantt segment).
///
/// Covers `[start_time, end_time)`; `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessExecution {
    /// Process that ran during this slice.
    pub process_id: u32,
    /// Slice start.
    pub start_time: i64,
    /// Slice end (exclusive).
    pub end_time: i64,
    /// Label copied from the process, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Timing summary for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// The simulated process.
    pub process: Process,
    /// Time at which the last slice of the process ended.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

/// Complete output of one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// One entry per input process, ascending by process id.
    pub processes: Vec<ProcessResult>,
    /// Executed slices in chronological order.
    pub gantt_chart: Vec<ProcessExecution>,
    /// Mean of `waiting_time` over all processes.
    pub average_waiting_time: f64,
    /// Mean of `turnaround_time` over all processes.
    pub average_turnaround_time: f64,
    /// Mean of `response_time` over all processes.
    pub average_response_time: f64,
    /// Makespan: completion time of the last process.
    pub total_time: i64,
}

impl ProcessExecution {
    /// Creates a segment for `process` covering `[start_time, end_time)`.
    pub fn new(process: &Process, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process.id,
            start_time,
            end_time,
            name: process.name.clone(),
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl ProcessResult {
    /// Derives turnaround and waiting times from completion and first dispatch.
    pub fn new(process: Process, completion_time: i64, first_dispatch: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = first_dispatch - process.arrival_time;
        Self {
            process,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }
}

impl SchedulingResult {
    /// Assembles a result, sorting summaries by process id and computing
    /// averages.
    ///
    /// Averages over an empty summary list are `0.0`.
    pub fn new(
        mut processes: Vec<ProcessResult>,
        gantt_chart: Vec<ProcessExecution>,
        total_time: i64,
    ) -> Self {
        processes.sort_by_key(|r| r.process.id);

        let average_waiting_time = mean(processes.iter().map(|r| r.waiting_time));
        let average_turnaround_time = mean(processes.iter().map(|r| r.turnaround_time));
        let average_response_time = mean(processes.iter().map(|r| r.response_time));

        Self {
            processes,
            gantt_chart,
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            total_time,
        }
    }

    /// Summary for a process id.
    pub fn result_for(&self, process_id: u32) -> Option<&ProcessResult> {
        self.processes.iter().find(|r| r.process.id == process_id)
    }

    /// All Gantt segments of a process, in chronological order.
    pub fn segments_for(&self, process_id: u32) -> Vec<&ProcessExecution> {
        self.gantt_chart
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Total time the CPU spent executing.
    pub fn busy_time(&self) -> i64 {
        self.gantt_chart.iter().map(|e| e.duration()).sum()
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    // i128 holds the sum of any realistic number of i64 values.
    let mut sum: i128 = 0;
    let mut count: usize = 0;
    for v in values {
        sum += i128::from(v);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
