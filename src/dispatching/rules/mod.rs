//! Built-in dispatching rules.
//!
//! - **FCFS**: earliest arrival first (FIFO and Round-Robin admission)
//! - **SPT**: shortest burst first (non-preemptive SJF)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First-Come-First-Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with the shortest burst. Minimizes average
/// waiting time among non-preemptive policies when all jobs are available.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }
}
