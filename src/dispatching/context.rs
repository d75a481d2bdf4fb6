//! Scheduling context for dispatching rule evaluation.

/// Runtime simulation state passed to dispatching rules.
///
/// All times are logical ticks relative to t=0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Time a process arriving at `arrival_time` has spent waiting so far.
    pub fn waited_since(&self, arrival_time: i64) -> i64 {
        (self.current_time - arrival_time).max(0)
    }
}
