//! CPU process-scheduling simulator for the U-Engine ecosystem.
//!
//! Turns a set of processes (arrival time, burst duration) into an
//! execution timeline and timing statistics under three classic policies:
//! First-Come-First-Served, Round-Robin and non-preemptive
//! Shortest-Job-First. Time is logical; nothing actually executes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessTable`,
//!   `ProcessExecution`, `ProcessResult`, `SchedulingResult`
//! - **`scheduler`**: The policies, KPI evaluation and algorithm comparison
//! - **`dispatching`**: Dispatching rules (FCFS, SPT) and the rule engine
//! - **`validation`**: Input integrity checks (empty set, burst, arrival, duplicate IDs)
//! - **`config`**: Serde-backed policy selection and the `simulate` entry point
//! - **`workload`**: Seedable random process sets
//!
//! # Example
//!
//! ```
//! use u_procsched::models::Process;
//! use u_procsched::scheduler::{run_round_robin, ScheduleKpi};
//!
//! let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
//! let result = run_round_robin(&processes, 2).unwrap();
//! let kpi = ScheduleKpi::calculate(&result);
//! assert_eq!(result.total_time, 7);
//! assert!((kpi.cpu_utilization - 100.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
