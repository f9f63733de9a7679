use abm_core::{SimTime, TimeError};
use thiserror::Error;

/// Producer configuration rejected before any scheduling happened.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProducerError {
    #[error("interval must be positive")]
    ZeroInterval,

    #[error("producer window start {start} is not before end {end}")]
    InvalidWindow { start: SimTime, end: SimTime },

    /// The producer's window was valid on its own terms but a scheduled
    /// time fell outside the simulation window.
    #[error(transparent)]
    Time(#[from] TimeError),
}

pub type ProducerResult<T> = Result<T, ProducerError>;
