//! Non-preemptive Shortest-Job-First scheduling.
//!
//! # Algorithm
//!
//! 1. Collect unscheduled processes with `arrival <= clock`, in input order.
//! 2. If none have arrived, jump the clock to the earliest pending arrival.
//! 3. Otherwise dispatch the shortest burst (first found wins a tie) and
//!    run it to completion.
//!
//! # Complexity
//! O(n²): one scan of the pending set per dispatch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::{debug, instrument, trace};

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, ProcessExecution, ProcessResult, SchedulingResult};
use crate::validation::validate_processes;

/// Simulates non-preemptive SJF over `processes`.
///
/// # Example
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::run_sjf;
///
/// let processes = vec![
///     Process::new(1, 0, 8),
///     Process::new(2, 1, 4),
///     Process::new(3, 2, 2),
/// ];
/// let result = run_sjf(&processes).unwrap();
/// let order: Vec<u32> = result.gantt_chart.iter().map(|e| e.process_id).collect();
/// assert_eq!(order, vec![1, 3, 2]);
/// ```
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn run_sjf(processes: &[Process]) -> Result<SchedulingResult, SimulationError> {
    validate_processes(processes)?;

    let engine = RuleEngine::new().with_rule(rules::Spt);
    let mut pending: Vec<&Process> = processes.iter().collect();
    let mut results = Vec::with_capacity(processes.len());
    let mut gantt_chart = Vec::with_capacity(processes.len());
    let mut current_time: i64 = 0;

    while !pending.is_empty() {
        let available: Vec<usize> = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= current_time)
            .map(|(i, _)| i)
            .collect();

        if available.is_empty() {
            match pending.iter().map(|p| p.arrival_time).min() {
                Some(next_arrival) => {
                    trace!(from = current_time, to = next_arrival, "cpu idle");
                    current_time = next_arrival;
                    continue;
                }
                None => break,
            }
        }

        let candidates: Vec<&Process> = available.iter().map(|&i| pending[i]).collect();
        let context = SchedulingContext::at_time(current_time);
        let Some(best) = engine.select_best(&candidates, &context) else {
            break;
        };
        let process = pending.remove(available[best]);

        let start_time = current_time;
        let completion_time = start_time + process.burst_time;
        debug!(
            process = process.id,
            burst = process.burst_time,
            waited = context.waited_since(process.arrival_time),
            ready = candidates.len(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spans(r: &SchedulingResult) -> Vec<(u32, i64, i64)> {
        r.gantt_chart
            .iter()
            .map(|e| (e.process_id, e.start_time, e.end_time))
            .collect()
    }

    #[test]
    fn test_non_preemptive_scenario() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ];
        let r = run_sjf(&processes).unwrap();

        // P1 is alone at t=0 and is not preempted by the shorter P3
        assert_eq!(spans(&r), vec![(1, 0, 8), (3, 8, 10), (2, 10, 14)]);
        assert_eq!(r.result_for(3).unwrap().waiting_time, 6);
        assert_eq!(r.result_for(2).unwrap().waiting_time, 9);
        assert_eq!(r.total_time, 14);
    }

    #[test]
    fn test_burst_tie_first_found_wins() {
        // P2 arrives later than P3 but appears first in the input
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 3, 2),
            Process::new(3, 1, 2),
        ];
        let r = run_sjf(&processes).unwrap();
        let order: Vec<u32> = r.gantt_chart.iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_jumps_to_next_arrival() {
        let processes = vec![Process::new(1, 4, 3), Process::new(2, 20, 1)];
        let r = run_sjf(&processes).unwrap();
        assert_eq!(spans(&r), vec![(1, 4, 7), (2, 20, 21)]);
        assert_eq!(r.result_for(1).unwrap().response_time, 0);
        assert_eq!(r.total_time, 21);
    }

    #[test]
    fn test_all_available_shortest_first() {
        let processes = vec![
            Process::new(1, 0, 6),
            Process::new(2, 0, 8),
            Process::new(3, 0, 7),
            Process::new(4, 0, 3),
        ];
        let r = run_sjf(&processes).unwrap();
        let order: Vec<u32> = r.gantt_chart.iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![4, 1, 3, 2]);
        assert!((r.average_waiting_time - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_choice_is_minimal_among_arrived() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = WorkloadGenerator::new(10)
            .with_max_arrival(15)
            .with_burst_range(1, 8);

        for _ in 0..30 {
            let processes = generator.generate(&mut rng);
            let r = run_sjf(&processes).unwrap();

            for seg in &r.gantt_chart {
                let chosen = &r.result_for(seg.process_id).unwrap().process;
                // Every process still waiting at this dispatch must not be shorter.
                for other in &r.processes {
                    let waiting_then = other.process.arrival_time <= seg.start_time
                        && other.completion_time > seg.start_time
                        && other.process.id != chosen.id;
                    if waiting_then {
                        assert!(chosen.burst_time <= other.process.burst_time);
                    }
                }
            }
        }
    }

    #[test]
    fn test_adjacent_large_bursts_ordered() {
        let processes = vec![
            Process::new(1, 0, (1 << 53) + 1),
            Process::new(2, 0, 1 << 53),
        ];
        let r = run_sjf(&processes).unwrap();
        let order: Vec<u32> = r.gantt_chart.iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(r.result_for(1).unwrap().waiting_time, 1 << 53);
    }
}
