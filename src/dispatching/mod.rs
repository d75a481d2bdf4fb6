//! Dispatching rules and rule engine for process selection.
//!
//! Every ordering decision the policies make (arrival order for FIFO and
//! Round-Robin, shortest burst for SJF) is expressed as a dispatching rule
//! evaluated by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{RuleEngine, SchedulingContext};
//! use u_procsched::dispatching::rules;
//! use u_procsched::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::Spt);
//!
//! let a = Process::new(1, 0, 8);
//! let b = Process::new(2, 1, 4);
//! let context = SchedulingContext::at_time(1);
//! assert_eq!(engine.select_best(&[&a, &b], &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are exact
/// integer times, so ordering never loses precision.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FCFS").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;
}
