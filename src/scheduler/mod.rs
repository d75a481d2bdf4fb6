//! Scheduling policies, KPI evaluation and algorithm comparison.
//!
//! Each policy turns a process set into a [`SchedulingResult`]: the Gantt
//! timeline plus per-process waiting, turnaround and response times.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FIFO | No | Earliest arrival, input order on ties |
//! | SJF | No | Shortest burst among arrived, first found on ties |
//! | Round-Robin | At quantum expiry | FIFO ready queue, arrivals admitted before requeue |
//!
//! All policies are pure: they validate input, own their bookkeeping for
//! the duration of the call, and never touch shared state.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod compare;
mod fifo;
mod kpi;
mod round_robin;
mod sjf;

pub use compare::{AlgorithmComparison, ComparisonEntry, Metric};
pub use fifo::run_fifo;
pub use kpi::ScheduleKpi;
pub use round_robin::run_round_robin;
pub use sjf::run_sjf;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, SchedulingResult};

/// A scheduling policy together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fifo,
    /// Round-Robin with a fixed time quantum.
    RoundRobin { quantum: i64 },
    /// Non-preemptive Shortest-Job-First.
    Sjf,
}

impl Algorithm {
    /// Runs this policy over `processes`.
    ///
    /// # Example
    /// ```
    /// use u_procsched::models::Process;
    /// use u_procsched::scheduler::Algorithm;
    ///
    /// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
    /// let result = Algorithm::Fifo.run(&processes).unwrap();
    /// assert_eq!(result.total_time, 8);
    /// assert!((result.average_waiting_time - 2.0).abs() < 1e-10);
    /// ```
    pub fn run(&self, processes: &[Process]) -> Result<SchedulingResult, SimulationError> {
        match *self {
            Algorithm::Fifo => run_fifo(processes),
            Algorithm::RoundRobin { quantum } => run_round_robin(processes, quantum),
            Algorithm::Sjf => run_sjf(processes),
        }
    }

    /// Short label ("FIFO", "RR", "SJF").
    pub fn short_name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::RoundRobin { .. } => "RR",
            Algorithm::Sjf => "SJF",
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin { .. })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fifo => f.write_str("First-Come-First-Served"),
            Algorithm::RoundRobin { quantum } => write!(f, "Round-Robin (q={quantum})"),
            Algorithm::Sjf => f.write_str("Shortest-Job-First"),
        }
    }
}

/// Processes in arrival order; ties keep their input order.
fn arrival_order(processes: &[Process]) -> Vec<&Process> {
    let refs: Vec<&Process> = processes.iter().collect();
    let engine = RuleEngine::new().with_rule(rules::Fcfs);
    engine
        .sort_indices(&refs, &SchedulingContext::default())
        .into_iter()
        .map(|i| refs[i])
        .collect()
}
