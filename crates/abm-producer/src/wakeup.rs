//! One-shot wake-up messages.

use std::any::Any;

use abm_core::{AgentId, Message, MessageId, SimTime, TimeResult};
use abm_engine::MessageSink;

/// A self-addressed message that wakes its agent at a chosen time.
///
/// Sender and destination are both the woken agent; the carried
/// `wake_time` equals the timestamp the message was scheduled for, so the
/// handler can tell a wake-up apart from other self-addressed traffic
/// without consulting the clock.
#[derive(Debug)]
pub struct WakeUpMessage {
    id: MessageId,
    agent: AgentId,
    wake_time: SimTime,
}

impl WakeUpMessage {
    /// Build a wake-up for `agent` and schedule it at `wake_time` in one
    /// step, returning the message identity.
    ///
    /// With `id: None` a fresh identity is generated.  A `wake_time`
    /// outside the sink's window propagates the sink's rejection, and
    /// nothing is scheduled.
    pub fn schedule(
        sink: &mut dyn MessageSink,
        agent: AgentId,
        wake_time: SimTime,
        id: Option<MessageId>,
    ) -> TimeResult<MessageId> {
        let message = WakeUpMessage {
            id: id.unwrap_or_else(MessageId::random),
            agent,
            wake_time,
        };
        let message_id = message.id;
        sink.schedule(Box::new(message), wake_time)?;
        Ok(message_id)
    }

    /// The time this message was scheduled to arrive.
    #[inline]
    pub fn wake_time(&self) -> SimTime {
        self.wake_time
    }
}

impl Message for WakeUpMessage {
    fn id(&self) -> MessageId {
        self.id
    }
    fn sender(&self) -> AgentId {
        self.agent
    }
    fn destination(&self) -> AgentId {
        self.agent
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
