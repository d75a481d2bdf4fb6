//! Process (input) model.
//!
//! A process is a unit of CPU work with an arrival time and a burst
//! (service) duration. Processes are created by the caller and are never
//! mutated by the scheduling engine.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks of logical time relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier (caller-assigned).
    pub id: u32,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// CPU time required to run to completion (>= 1).
    pub burst_time: i64,
}

impl Process {
    /// Creates a new unnamed process.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            name: None,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the process label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label for display: the name if set, otherwise `P<id>`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("P{}", self.id),
        }
    }
}
