//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (input order on ties).
//! 2. Walk the order once: each process starts at `max(clock, arrival)`
//!    and runs to completion.
//!
//! Idle gaps between arrivals produce no Gantt segment.
//!
//! # Complexity
//! O(n log n) for the arrival sort.

use tracing::{debug, instrument};

use super::arrival_order;
use crate::error::SimulationError;
use crate::models::{Process, ProcessExecution, ProcessResult, SchedulingResult};
use crate::validation::validate_processes;

/// Simulates FCFS over `processes`.
///
/// Processes execute in arrival order, but `SchedulingResult::processes`
/// lists them by ascending id like every other policy. Use the Gantt
/// chart for execution order.
///
/// # Example
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::run_fifo;
///
/// let result = run_fifo(&[Process::new(1, 0, 5), Process::new(2, 1, 3)]).unwrap();
/// assert_eq!(result.gantt_chart[1].start_time, 5);
/// assert_eq!(result.processes[1].waiting_time, 4);
/// ```
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn run_fifo(processes: &[Process]) -> Result<SchedulingResult, SimulationError> {
    validate_processes(processes)?;

    let mut results = Vec::with_capacity(processes.len());
    let mut gantt_chart = Vec::with_capacity(processes.len());
    let mut current_time: i64 = 0;

    for process in arrival_order(processes) {
        let start_time = current_time.max(process.arrival_time);
        let completion_time = start_time + process.burst_time;
        debug!(
            process = process.id,
            start = start_time,
            end = completion_time,
            "dispatch"
        );

        gantt_chart.push(ProcessExecution::new(process, start_time, completion_time));
        results.push(ProcessResult::new(
            process.clone(),
            completion_time,
            start_time,
        ));
        current_time = completion_time;
    }

    Ok(SchedulingResult::new(results, gantt_chart, current_time))
}
