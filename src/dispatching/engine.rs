//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules that are consulted in sequence.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process prioritization.
///
/// Rules are applied in sequence: the next rule is consulted only when
/// the previous ones tie. Candidates tied on every rule keep their slice
/// order.
///
/// # Example
/// ```
/// use u_procsched::dispatching::RuleEngine;
/// use u_procsched::dispatching::rules;
///
/// let engine = RuleEngine::new().with_rule(rules::Fcfs);
/// assert_eq!(engine.rule_names(), vec!["FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (highest priority first).
    ///
    /// Returns indices into `candidates`. The sort is stable.
    pub fn sort_indices(&self, candidates: &[&Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b], context));
        indices
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// On a full tie the earliest candidate wins.
    pub fn select_best(&self, candidates: &[&Process], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            match best {
                Some(b) if self.compare(candidate, candidates[b], context) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_spt_ordering() {
        let long = Process::new(1, 0, 5);
        let short = Process::new(2, 0, 1);
        let medium = Process::new(3, 0, 3);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        let indices = engine.sort_indices(&[&long, &short, &medium], &ctx);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_fcfs_stable_on_ties() {
        let a = Process::new(5, 2, 1);
        let b = Process::new(3, 0, 1);
        let c = Process::new(4, 2, 1);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Fcfs);

        // b arrives first; a and c tie and keep slice order
        assert_eq!(engine.sort_indices(&[&a, &b, &c], &ctx), vec![1, 0, 2]);
    }

    #[test]
    fn test_second_rule_breaks_ties() {
        let a = Process::new(1, 3, 4);
        let b = Process::new(2, 1, 4); // same burst, earlier arrival
        let ctx = SchedulingContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Fcfs);

        assert_eq!(engine.select_best(&[&a, &b], &ctx), Some(1));
    }

    #[test]
    fn test_select_best_first_minimum() {
        let a = Process::new(7, 0, 2);
        let b = Process::new(1, 0, 2);
        let c = Process::new(2, 0, 9);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.select_best(&[&c, &a, &b], &ctx), Some(1));
    }

    #[test]
    fn test_adjacent_large_scores_not_tied() {
        let a = Process::new(1, (1 << 53) + 1, (1 << 53) + 1);
        let b = Process::new(2, 1 << 53, 1 << 53);
        let ctx = SchedulingContext::at_time(0);

        let spt = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(spt.select_best(&[&a, &b], &ctx), Some(1));

        let fcfs = RuleEngine::new().with_rule(rules::Fcfs);
        assert_eq!(fcfs.sort_indices(&[&a, &b], &ctx), vec![1, 0]);
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        let text = format!("{engine:?}");
        assert!(text.contains("SPT"));
    }
}
