//! Periodic self-addressed event messages.
//!
//! `PeriodicSchedule` is the pre-computed variant of a recurring timer: all
//! occurrences are scheduled up front, one message per interval step inside
//! the producer's half-open window `[start, end)`.  Agents that want a
//! rolling timer instead can schedule their next `WakeUpMessage` from
//! inside their handler.

use std::any::Any;

use abm_core::{AgentId, Message, MessageId, SimTime, SpecId};
use abm_engine::MessageSink;

use crate::error::{ProducerError, ProducerResult};

// ── PeriodicMessage ──────────────────────────────────────────────────────────

/// One occurrence of a periodic event, addressed to its own agent.
#[derive(Debug)]
pub struct PeriodicMessage {
    id: MessageId,
    agent: AgentId,
}

impl PeriodicMessage {
    /// With `id: None` a fresh identity is generated — each occurrence of a
    /// periodic schedule is a distinct message.
    pub fn new(agent: AgentId, id: Option<MessageId>) -> Self {
        Self {
            id: id.unwrap_or_else(MessageId::random),
            agent,
        }
    }
}

impl Message for PeriodicMessage {
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

// ── PeriodicSchedule ─────────────────────────────────────────────────────────

/// A validated recipe for a train of [`PeriodicMessage`]s.
#[derive(Debug, Clone)]
pub struct PeriodicSchedule {
    id: SpecId,
    agent: AgentId,
    interval: u64,
    start: SimTime,
    end: SimTime,
}

impl PeriodicSchedule {
    /// Validate and build a schedule for `agent`: one message every
    /// `interval` units from `start` (inclusive) up to `end` (exclusive).
    ///
    /// Fails fast — before anything touches a scheduler — with
    /// [`ProducerError::ZeroInterval`] or [`ProducerError::InvalidWindow`].
    pub fn new(
        agent: AgentId,
        interval: u64,
        start: SimTime,
        end: SimTime,
    ) -> ProducerResult<Self> {
        if interval == 0 {
            return Err(ProducerError::ZeroInterval);
        }
        if start >= end {
            return Err(ProducerError::InvalidWindow { start, end });
        }
        Ok(Self {
            id: SpecId::random(),
            agent,
            interval,
            start,
            end,
        })
    }

    #[inline]
    pub fn id(&self) -> SpecId {
        self.id
    }

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Number of occurrences this schedule will emit.
    pub fn occurrences(&self) -> u64 {
        (self.end - self.start).div_ceil(self.interval)
    }

    /// Schedule every occurrence through `sink`, in ascending time order.
    ///
    /// Returns the number of messages scheduled.  If the sink rejects a
    /// timestamp (the producer window reaches outside the simulation
    /// window), the error propagates with the earlier occurrences left in
    /// place.
    pub fn schedule_all(&self, sink: &mut dyn MessageSink) -> ProducerResult<usize> {
        let mut time = self.start;
        let mut scheduled = 0;
        while time < self.end {
            sink.schedule(Box::new(PeriodicMessage::new(self.agent, None)), time)?;
            scheduled += 1;
            time = time.offset(self.interval);
        }
        Ok(scheduled)
    }
}
