//! Caller-side process collection with monotonic id assignment.

use serde::{Deserialize, Serialize};

use super::Process;

/// An editable list of processes awaiting simulation.
///
/// Ids come from a counter owned by the table, starting at 1. The counter
/// only moves forward, so removing a process never causes a later one to
/// reuse its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
    next_id: u32,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a process and returns its assigned id.
    ///
    /// Returns `None` without adding anything once the counter reaches
    /// `u32::MAX`, so ids never wrap around to one already issued.
    pub fn add(
        &mut self,
        arrival_time: i64,
        burst_time: i64,
        name: Option<String>,
    ) -> Option<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        self.processes.push(Process {
            id,
            name,
            arrival_time,
            burst_time,
        });
        Some(id)
    }

    /// Removes the process with the given id. Returns it if present.
    pub fn remove(&mut self, id: u32) -> Option<Process> {
        let pos = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(pos))
    }

    /// Removes all processes. The id counter is kept.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Id the next added process will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Number of processes in the table.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
