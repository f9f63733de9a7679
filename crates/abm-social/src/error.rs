use std::fmt;

use abm_core::AgentId;

/// Graph operations referencing absent vertices or edges.
///
/// Both variants are precondition failures: the operation performed no
/// state change.
///
/// `Display` and `Error` are implemented by hand rather than derived with
/// `thiserror`: the derive treats any field named `source` as the error's
/// cause, and `UnknownEdge`'s `source` field is a graph endpoint, not an
/// underlying error.
#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    UnknownVertex(AgentId),

    UnknownEdge { source: AgentId, target: AgentId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(id) => {
                write!(f, "vertex {id} is not in the graph")
            }
            GraphError::UnknownEdge { source, target } => {
                write!(f, "no edge from {source} to {target}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;
