use abm_core::{AgentId, SimTime, TimeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A message was addressed to an identity with no registered agent.
    /// The run aborts at this point; deliveries made before the failure
    /// stand, the rest of the offending bucket is discarded.
    #[error("no agent registered for destination {destination} at {time}")]
    UnknownAgent {
        destination: AgentId,
        time: SimTime,
    },

    #[error(transparent)]
    Time(#[from] TimeError),
}

pub type EngineResult<T> = Result<T, EngineError>;
