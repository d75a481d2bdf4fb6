//! Round-Robin scheduling with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` to the back of the ready
//!    queue, in arrival order.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`. The first
//!    dispatch of a process fixes its response time.
//! 4. Admit processes that arrived during the slice, then requeue the
//!    process if it still has work. Fresh arrivals therefore run before a
//!    process whose slice just expired.
//!
//! # Complexity
//! O(n log n + Σ⌈burst/quantum⌉).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use super::arrival_order;
use crate::error::SimulationError;
use crate::models::{Process, ProcessExecution, ProcessResult, SchedulingResult};
use crate::validation::{validate_processes, validate_quantum};

/// Simulates Round-Robin over `processes` with the given `quantum`.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`] if `quantum < 1`, and
/// [`SimulationError::InvalidInput`] for a malformed process set.
///
/// # Example
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::run_round_robin;
///
/// let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
/// let result = run_round_robin(&processes, 2).unwrap();
/// assert_eq!(result.gantt_chart.len(), 4);
/// assert_eq!(result.total_time, 7);
/// ```
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn run_round_robin(
    processes: &[Process],
    quantum: i64,
) -> Result<SchedulingResult, SimulationError> {
    validate_quantum(quantum)?;
    validate_processes(processes)?;

    let by_arrival = arrival_order(processes);
    let n = by_arrival.len();

    // Bookkeeping is indexed by position in `by_arrival`.
    let mut remaining: Vec<i64> = by_arrival.iter().map(|p| p.burst_time).collect();
    let mut first_dispatch: Vec<Option<i64>> = vec![None; n];
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut next_arrival = 0;

    let mut results = Vec::with_capacity(n);
    let mut gantt_chart = Vec::new();
    let mut current_time: i64 = 0;

    while !ready.is_empty() || next_arrival < n {
        admit_arrivals(&by_arrival, &mut next_arrival, current_time, &mut ready);

        let Some(idx) = ready.pop_front() else {
            if let Some(next) = by_arrival.get(next_arrival) {
                trace!(from = current_time, to = next.arrival_time, "cpu idle");
                current_time = next.arrival_time;
            }
            continue;
        };

        let process = by_arrival[idx];
        let dispatched_at = *first_dispatch[idx].get_or_insert(current_time);
        let executed = quantum.min(remaining[idx]);
        let end_time = current_time + executed;
        debug!(
            process = process.id,
            start = current_time,
            end = end_time,
            left = remaining[idx] - executed,
            "dispatch"
        );

        gantt_chart.push(ProcessExecution::new(process, current_time, end_time));
        current_time = end_time;
        remaining[idx] -= executed;

        admit_arrivals(&by_arrival, &mut next_arrival, current_time, &mut ready);

        if remaining[idx] > 0 {
            ready.push_back(idx);
        } else {
            results.push(ProcessResult::new(
                process.clone(),
                current_time,
                dispatched_at,
            ));
        }
    }

    Ok(SchedulingResult::new(results, gantt_chart, current_time))
}

/// Moves every process with `arrival <= now` from the arrival list into
/// the ready queue.
fn admit_arrivals(
    by_arrival: &[&Process],
    next_arrival: &mut usize,
    now: i64,
    ready: &mut VecDeque<usize>,
) {
    while let Some(p) = by_arrival.get(*next_arrival) {
        if p.arrival_time > now {
            break;
        }
        ready.push_back(*next_arrival);
        *next_arrival += 1;
    }
}
