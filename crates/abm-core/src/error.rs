//! Time-validity errors shared by the scheduler and everything that feeds it.
//!
//! Sub-crates define their own error enums and absorb `TimeError` via
//! `#[from]` variants where scheduling can fail.

use thiserror::Error;

use crate::time::SimTime;

/// A rejected timestamp, naming the violated bound.
///
/// Every variant is a precondition failure: the operation that returned it
/// performed no state change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("simulation window is empty: start {start} is not before end {end}")]
    EmptyWindow { start: SimTime, end: SimTime },

    #[error("time {time} is before the simulation start {start}")]
    BeforeStart { time: SimTime, start: SimTime },

    #[error("time {time} is after the simulation end {end}")]
    AfterEnd { time: SimTime, end: SimTime },

    #[error("time {time} is before the current time {current}")]
    BeforeCurrent { time: SimTime, current: SimTime },
}

/// Shorthand result type for time-validated operations.
pub type TimeResult<T> = Result<T, TimeError>;
