//! Simulation configuration.
//!
//! Holds the caller's policy choice and Round-Robin quantum as a
//! serde-friendly value, so it can be loaded from the same JSON the
//! presentation layer exchanges.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::SimulationError;
use crate::models::{Process, SchedulingResult};
use crate::scheduler::Algorithm;
use crate::validation::validate_quantum;

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Policy selector without parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "RR")]
    RoundRobin,
    #[serde(rename = "SJF")]
    Sjf,
}

/// Caller-selected policy and parameters.
///
/// `quantum` is only consulted for Round-Robin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub algorithm: AlgorithmKind,
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (FIFO, quantum 2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy.
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Resolves the configured policy.
    ///
    /// Fails with [`SimulationError::InvalidQuantum`] if Round-Robin is
    /// selected with a quantum below 1.
    pub fn to_algorithm(&self) -> Result<Algorithm, SimulationError> {
        match self.algorithm {
            AlgorithmKind::Fifo => Ok(Algorithm::Fifo),
            AlgorithmKind::Sjf => Ok(Algorithm::Sjf),
            AlgorithmKind::RoundRobin => {
                validate_quantum(self.quantum)?;
                Ok(Algorithm::RoundRobin {
                    quantum: self.quantum,
                })
            }
        }
    }
}

/// Runs the configured policy over `processes`.
///
/// # Example
/// ```
/// use u_procsched::config::{simulate, AlgorithmKind, SimulationConfig};
/// use u_procsched::models::Process;
///
/// let config = SimulationConfig::new().with_algorithm(AlgorithmKind::RoundRobin);
/// let result = simulate(&[Process::new(1, 0, 4), Process::new(2, 1, 3)], &config).unwrap();
/// assert_eq!(result.result_for(2).unwrap().response_time, 1);
/// ```
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SchedulingResult, SimulationError> {
    let algorithm = config.to_algorithm()?;
    let result = algorithm.run(processes)?;
    info!(
        algorithm = algorithm.short_name(),
        total_time = result.total_time,
        avg_waiting = result.average_waiting_time,
        "simulation complete"
    );
    Ok(result)
}
