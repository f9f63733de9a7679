//! The `Agent` trait — the capability the scheduler dispatches to.

use abm_core::{AgentId, Message};

use crate::context::SimContext;

/// An addressable participant in the simulation.
///
/// Agents are opaque to the engine beyond this capability: an identity to
/// register under, and a handler the scheduler invokes synchronously for
/// every message addressed to that identity.
///
/// # Re-entrancy
///
/// `handle` runs in the middle of the scheduler's delivery loop.  The
/// [`SimContext`] it receives is the only way back into the scheduler from
/// there: handlers may read the clock and schedule or send further messages,
/// and anything they schedule is observed by the same run.
pub trait Agent {
    /// The identity this agent is addressed by.
    fn id(&self) -> AgentId;

    /// Handle one message delivered at the current simulated time.
    fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>);
}
