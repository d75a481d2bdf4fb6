//! Process scheduling domain models.
//!
//! Provides the input and output data types shared by every scheduling
//! policy. The same types flow through FIFO, Round-Robin and SJF.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input: arrival time and burst duration |
//! | ProcessTable | Caller-side collection with monotonic ids |
//! | ProcessExecution | One Gantt segment |
//! | ProcessResult | Per-process timing summary |
//! | SchedulingResult | Complete simulation output |

mod process;
mod schedule;
mod table;

pub use process::Process;
pub use schedule::{ProcessExecution, ProcessResult, SchedulingResult};
pub use table::ProcessTable;
